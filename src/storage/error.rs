//! Storage error types
//!
//! Defines all errors that can occur in the key-value storage layer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing stored state
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The backing file exists but isn't a JSON object of strings
    #[error("Corrupt store file {path:?}: {error}")]
    Corruption { path: PathBuf, error: String },
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result type alias for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::Serialization("expected value".to_string());
        assert_eq!(err.to_string(), "Serialization error: expected value");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let store_err: StoreError = io_err.into();
        assert!(matches!(store_err, StoreError::Io(_)));
    }
}
