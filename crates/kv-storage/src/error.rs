//! Storage error types

use thiserror::Error;

/// Errors raised by a key-value store
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    /// No window, or the browser denied access to localStorage
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// `setItem` failed (quota exceeded, private mode, ...)
    #[error("Write to `{key}` rejected: {reason}")]
    WriteRejected { key: String, reason: String },

    /// Stored value could not be decoded
    #[error("Corrupt data under `{key}`: {reason}")]
    Corrupt { key: String, reason: String },

    /// Value could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
