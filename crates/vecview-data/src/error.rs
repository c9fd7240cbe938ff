//! Error types for data operations.

use thiserror::Error;

/// Result type for data operations.
pub type DataResult<T> = Result<T, DataError>;

/// Error type for data operations.
#[derive(Debug, Error)]
pub enum DataError {
    /// Reading or writing the delimited text failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The delimited text does not start with the expected header row.
    #[error("unexpected header: expected {expected:?}, got {actual:?}")]
    Header {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    /// Flushing the in-memory writer failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
