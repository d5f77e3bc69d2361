//! Error handling module for the toyt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;
use toyc_lex::KeywordError;

/// Main error type for the toyt CLI application.
#[derive(Error, Debug)]
pub enum ToytError {
    /// Error when the configuration cannot be found, parsed or saved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when a dialect or keyword entry is rejected.
    #[error("Keyword error: {0}")]
    Keyword(#[from] KeywordError),

    /// Illegal characters were found and `--deny-illegal` was set.
    #[error("{0} illegal token(s) found")]
    IllegalTokens(usize),
}

/// Result type alias using ToytError.
pub type Result<T> = std::result::Result<T, ToytError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ToytError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ToytError::Validation("invalid format".to_string());
        assert_eq!(err.to_string(), "Validation error: invalid format");
    }

    #[test]
    fn test_illegal_tokens_display() {
        assert_eq!(ToytError::IllegalTokens(3).to_string(), "3 illegal token(s) found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let toyt_err: ToytError = io_err.into();
        assert!(matches!(toyt_err, ToytError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let toyt_err: ToytError = json_err.into();
        assert!(matches!(toyt_err, ToytError::Json(_)));
    }

    #[test]
    fn test_keyword_error_conversion() {
        let toyt_err: ToytError = KeywordError::UnknownDialect("cobol".to_string()).into();
        assert_eq!(
            toyt_err.to_string(),
            "Keyword error: unknown dialect 'cobol' (expected 'standard' or 'go')"
        );
    }
}
