//! Custom Error and Result types for this library

use thiserror::Error;

/// Custom Error type for this library
#[derive(Error, Debug)]
pub enum RCartLibError {
    /// Errors reading or writing the underlying storage medium
    #[error("storage io error: {_0}")]
    Io(#[from] std::io::Error),

    /// Errors converting lists to and from their persisted form
    #[error("serialization error: {_0}")]
    Serialization(#[from] serde_json::Error),

    /// Wrapping errors related to a specific storage slot
    #[error("storage error: {error} - key: {key}")]
    Storage {
        /// The error message encountered
        error: String,
        /// The storage key being accessed
        key: String,
    },
}

impl RCartLibError {
    /// Converter for errors raised while accessing a keyed storage slot
    pub fn from_storage_err<E: std::fmt::Display>(key: &str, error: E) -> Self {
        Self::Storage {
            error: error.to_string(),
            key: key.to_string(),
        }
    }
}

/// Custom Result type for this library. All Errors exposed by this library
/// will be returned as [`RCartLibError`]
pub type Result<T> = std::result::Result<T, RCartLibError>;
