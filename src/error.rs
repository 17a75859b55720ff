//! Custom error types for VibePay
//!
//! The interpreter itself never fails: an unreadable message is an
//! `Unrecognized` intent, not an error. These errors cover the collaborators
//! around it (configuration, storage and serialization).

use thiserror::Error;

/// The main error type for VibePay operations
#[derive(Error, Debug)]
pub enum VibepayError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Key-value storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),
}

impl VibepayError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for VibepayError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for VibepayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for VibePay operations
pub type VibepayResult<T> = Result<T, VibepayError>;
