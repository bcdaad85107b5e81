/// Data layer: the matrix type and its text I/O.
///
/// Architecture:
/// ```text
///      .csv (", "-delimited)
///            │
///            ▼
///       ┌──────────┐
///       │  loader   │  parse text → Matrix
///       └──────────┘
///            │
///            ▼
///       ┌──────────┐
///       │  Matrix   │  row-major rectangular f64 grid
///       └──────────┘
///            │
///            ▼
///       ┌──────────┐
///       │  writer   │  Matrix → ", "-delimited text
///       └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod writer;
