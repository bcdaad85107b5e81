use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between reading a matrix and writing an
/// image.
#[derive(Debug, Error)]
pub enum Error {
    /// The input path does not exist.
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    /// A cell could not be parsed as a floating-point number.
    #[error("row {row}, column {col}: '{token}' is not a number")]
    NonNumeric {
        row: usize,
        col: usize,
        token: String,
    },

    /// A row's column count differs from the first row's.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The matrix has no rows or no columns.
    #[error("matrix must have at least one row and one column")]
    EmptyMatrix,

    /// A flat buffer does not match the requested dimensions.
    #[error("{rows}x{cols} matrix needs {} values, got {len}", .rows * .cols)]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        len: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}
