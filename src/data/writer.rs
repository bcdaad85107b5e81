use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::model::Matrix;
use crate::error::Result;

// ---------------------------------------------------------------------------
// Delimited-text writer
// ---------------------------------------------------------------------------

/// Write a matrix as delimited text: one row per line, columns joined
/// with `", "`, no trailing delimiter.
///
/// Values use `f64`'s `Display` formatting, the shortest string that
/// parses back to the same float, so a written matrix reloads exactly.
pub fn write_matrix(matrix: &Matrix, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    for row in matrix.iter_rows() {
        let line = row
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "{line}")?;
    }

    out.flush()?;
    Ok(())
}
