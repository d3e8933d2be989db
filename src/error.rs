//! Error types for HashLab
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using HashLabError
pub type Result<T> = std::result::Result<T, HashLabError>;

/// Unified error type for HashLab operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashLabError {
    // -------------------------------------------------------------------------
    // Table Errors
    // -------------------------------------------------------------------------
    #[error("Key {key} already exists")]
    DuplicateKey { key: i64 },

    #[error("Table is full, no free slot reachable for key {key}")]
    TableFull { key: i64 },

    #[error("Key {key} not found")]
    NotFound { key: i64 },

    #[error("Invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Shell Errors
    // -------------------------------------------------------------------------
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for HashLabError {
    fn from(err: std::io::Error) -> Self {
        HashLabError::Io(err.to_string())
    }
}
