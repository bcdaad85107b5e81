use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use super::model::Matrix;
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Delimited-text loader
// ---------------------------------------------------------------------------

/// Load a matrix from a delimited text file.
///
/// Layout: no header, one matrix row per line, columns separated by a
/// comma followed by a space:
///   `0.12, 0.14, 0.11`
///
/// `Trim::All` absorbs the space after each comma, so plain `,` input
/// parses the same way. Rows must all have the first row's column count.
pub fn load_matrix(path: &Path) -> Result<Matrix> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(file);

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        let row = record
            .iter()
            .enumerate()
            .map(|(col, tok)| {
                tok.parse::<f64>().map_err(|_| Error::NonNumeric {
                    row: row_no,
                    col,
                    token: tok.to_string(),
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }

    Matrix::from_rows(rows)
}
