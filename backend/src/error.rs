//! Error types for the CSV to JSON converter.
//!
//! This module defines one error type per concern:
//!
//! - [`ConvertError`] - CSV to JSON conversion errors
//! - [`SaveError`] - JSON buffer save errors
//! - [`HostError`] - File host (read/save dialog) errors
//! - [`ServerError`] - HTTP API errors
//!
//! The `Display` text of the conversion and save errors is exactly what the
//! user is shown, so a UI adapter can surface `err.to_string()` directly.

use thiserror::Error;

use crate::config::{EMPTY_JSON_MESSAGE, INVALID_CSV_MESSAGE, INVALID_JSON_MESSAGE};

// =============================================================================
// Conversion Errors
// =============================================================================

/// Errors during CSV to JSON conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The CSV text matched the "looks broken" shape pattern.
    #[error("{}", INVALID_CSV_MESSAGE)]
    InvalidCsv,

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Host Errors
// =============================================================================

/// Errors from the file host (file picker and save dialog).
#[derive(Debug, Error)]
pub enum HostError {
    /// The user dismissed the dialog. Not reported to the user.
    #[error("Cancelled by user")]
    Cancelled,

    /// Filesystem error.
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// The host could not provide the service.
    #[error("File service unavailable: {0}")]
    Unavailable(String),
}

impl HostError {
    /// Whether this error is a user cancellation rather than a failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, HostError::Cancelled)
    }
}

// =============================================================================
// Save Errors
// =============================================================================

/// Errors when saving the JSON buffer.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The JSON buffer is empty or whitespace.
    #[error("{}", EMPTY_JSON_MESSAGE)]
    EmptyJson,

    /// The JSON buffer does not parse. Carries the parser message.
    #[error("{} \n\n{}", INVALID_JSON_MESSAGE, .0)]
    MalformedJson(String),

    /// The host failed to write the file.
    #[error("Save failed: {0}")]
    Host(HostError),
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Conversion error.
    #[error("Conversion error: {0}")]
    Convert(#[from] ConvertError),

    /// Invalid request.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Server internal error.
    #[error("Internal server error: {0}")]
    Internal(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Result type for save operations.
pub type SaveResult<T> = Result<T, SaveError>;

/// Result type for host operations.
pub type HostResult<T> = Result<T, HostError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(ConvertError::InvalidCsv.to_string(), "Invalid CSV!");
        assert_eq!(SaveError::EmptyJson.to_string(), "JSON is empty!");

        let err = SaveError::MalformedJson("EOF while parsing an object".into());
        assert_eq!(
            err.to_string(),
            "Invalid JSON! \n\nEOF while parsing an object"
        );
    }

    #[test]
    fn test_error_conversion_chain() {
        let server_err: ServerError = ConvertError::InvalidCsv.into();
        assert!(server_err.to_string().contains("Invalid CSV!"));

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.csv");
        let host_err: HostError = io.into();
        assert!(!host_err.is_cancelled());
        assert!(host_err.to_string().contains("missing.csv"));
        assert!(HostError::Cancelled.is_cancelled());
    }
}
