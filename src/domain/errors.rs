//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types;
//! parser and I/O diagnostics are carried as strings.

use thiserror::Error;

/// Main Veil error type
#[derive(Debug, Error)]
pub enum VeilError {
    /// Input was empty after trimming whitespace, raised before parsing
    #[error("Input is empty")]
    EmptyInput,

    /// Input was not well-formed JSON; carries the parser's diagnostic
    #[error("Invalid JSON: {0}")]
    Parse(String),

    /// Output serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for VeilError {
    fn from(err: std::io::Error) -> Self {
        VeilError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for VeilError {
    fn from(err: serde_json::Error) -> Self {
        VeilError::Serialization(err.to_string())
    }
}
