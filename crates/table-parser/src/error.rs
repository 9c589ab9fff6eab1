//! Error types for grid table parsing.

use thiserror::Error;

/// Result type for table parser operations.
pub type TableResult<T> = Result<T, TableError>;

/// Error types for tab-delimited grid parsing.
#[derive(Error, Debug)]
pub enum TableError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A field could not be parsed as a number
    #[error("Invalid number {value:?} at line {line}, column {column}")]
    Parse {
        line: usize,
        column: usize,
        value: String,
    },

    /// Row length differs from the first row
    #[error("Ragged grid: line {line} has {found} fields, expected {expected}")]
    RaggedRow {
        line: usize,
        found: usize,
        expected: usize,
    },

    /// No data rows in the input
    #[error("Empty grid table")]
    Empty,
}
