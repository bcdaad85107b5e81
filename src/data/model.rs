use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Matrix – a rectangular 2-D grid of floats
// ---------------------------------------------------------------------------

/// A row-major rectangular matrix of `f64` values.
///
/// Immutable after construction; both constructors enforce the only
/// invariant the renderer needs: at least one row and one column, every
/// row the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl Matrix {
    /// Build a matrix from parsed rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(Error::EmptyMatrix);
        };
        let cols = first.len();
        if cols == 0 {
            return Err(Error::EmptyMatrix);
        }

        let n_rows = rows.len();
        let mut values = Vec::with_capacity(n_rows * cols);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != cols {
                return Err(Error::RaggedRow {
                    row,
                    expected: cols,
                    found: cells.len(),
                });
            }
            values.extend(cells);
        }

        Ok(Matrix {
            rows: n_rows,
            cols,
            values,
        })
    }

    /// Build a matrix from a flat row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyMatrix);
        }
        if values.len() != rows * cols {
            return Err(Error::ShapeMismatch {
                rows,
                cols,
                len: values.len(),
            });
        }
        Ok(Matrix { rows, cols, values })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at (row, col). Panics when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.cols)
    }

    /// Minimum and maximum cell value. NaN cells are skipped by the fold.
    pub fn value_range(&self) -> (f64, f64) {
        let min = self.values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = self
            .values
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    }
}
