//! Error types for the contact book server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when talking to the document store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Stored document could not be serialized or deserialized
    #[error("Document encoding error: {0}")]
    Document(#[from] serde_json::Error),

    /// No record exists with the given id
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Blocking task was cancelled or panicked
    #[error("Storage task failed: {0}")]
    TaskFailed(String),

    /// Generic store error with context
    #[error("Store error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::NotFound("c1".to_string());
        assert_eq!(err.to_string(), "Contact not found: c1");

        let err = ConfigError::InvalidValue {
            var: "BIND_ADDR".to_string(),
            reason: "not a socket address".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for BIND_ADDR: not a socket address"
        );
    }

    #[test]
    fn test_store_error_from_serde() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: StoreError = json_err.into();
        assert!(err.to_string().contains("Document encoding error"));
    }
}
