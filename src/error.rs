//! Error types for table state reduction.

use thiserror::Error;

/// Main error type for reducer operations.
#[derive(Debug, Error)]
pub enum TableError {
    /// The column set did not contain exactly one primary-key column.
    #[error(
        "One column must be marked as primary with \"primaryKey\" for data table {table} (found {found})."
    )]
    Configuration { table: String, found: usize },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for TableError {
    fn from(e: serde_json::Error) -> Self {
        TableError::Deserialization(e.to_string())
    }
}

/// Result type for reducer operations.
pub type Result<T> = std::result::Result<T, TableError>;
