//! Domain error types
//!
//! This module defines the error hierarchy for Bandstand. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Bandstand error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum BandstandError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Document-store failures, carrying the status the store reported
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// A failure reported by the external document store
///
/// The store collaborator completes every operation with either a value or
/// a `{status, message}` failure. `status` is the HTTP status the store
/// reported, if it reported one at all — transport-level failures
/// (connection refused, malformed response) carry no status and default to
/// 500 at the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StoreError {
    /// Status reported by the store, if any
    pub status: Option<u16>,

    /// Human-readable message, propagated verbatim to the caller
    pub message: String,
}

impl StoreError {
    /// Creates a new store error
    pub fn new(status: impl Into<Option<u16>>, message: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            message: message.into(),
        }
    }

    /// Creates a store error with no upstream status (surfaces as 500)
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(None, message)
    }

    /// The status to surface to HTTP callers, defaulting to 500
    pub fn status_or_default(&self) -> u16 {
        self.status.unwrap_or(500)
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for BandstandError {
    fn from(err: std::io::Error) -> Self {
        BandstandError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for BandstandError {
    fn from(err: serde_json::Error) -> Self {
        BandstandError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for BandstandError {
    fn from(err: toml::de::Error) -> Self {
        BandstandError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bandstand_error_display() {
        let err = BandstandError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_store_error_message_is_verbatim() {
        let err = StoreError::new(404, "missing");
        assert_eq!(err.to_string(), "missing");
    }

    #[test]
    fn test_store_error_conversion() {
        let store_err = StoreError::new(409, "Document update conflict.");
        let err: BandstandError = store_err.into();
        assert!(matches!(err, BandstandError::Store(_)));
        assert_eq!(err.to_string(), "Document update conflict.");
    }

    #[test]
    fn test_store_error_status_default() {
        assert_eq!(StoreError::new(404, "missing").status_or_default(), 404);
        assert_eq!(StoreError::unavailable("down").status_or_default(), 500);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: BandstandError = io_err.into();
        assert!(matches!(err, BandstandError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: BandstandError = json_err.into();
        assert!(matches!(err, BandstandError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: BandstandError = toml_err.into();
        assert!(matches!(err, BandstandError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let err = BandstandError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;

        let err = StoreError::new(500, "boom");
        let _: &dyn std::error::Error = &err;
    }
}
