//! Core error types for toyc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for diagnostic operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagnosticError {
    /// The diagnostic span does not fit inside the source it is rendered against
    #[error("Span out of bounds: source has {source_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        /// Length of the source in bytes
        source_len: usize,
        /// Start offset of the offending span
        span_start: usize,
        /// End offset of the offending span
        span_end: usize,
    },

    /// The span points at a line the source does not have
    #[error("Invalid line number: {line} (source has {max_lines} lines)")]
    InvalidLineNumber {
        /// Requested line (1-based)
        line: usize,
        /// Number of lines in the source
        max_lines: usize,
    },
}

/// Result type alias for diagnostic operations
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_out_of_bounds_display() {
        let err = DiagnosticError::SpanOutOfBounds {
            source_len: 4,
            span_start: 2,
            span_end: 9,
        };
        assert_eq!(
            err.to_string(),
            "Span out of bounds: source has 4 bytes, span is 2..9"
        );
    }

    #[test]
    fn test_invalid_line_display() {
        let err = DiagnosticError::InvalidLineNumber {
            line: 7,
            max_lines: 3,
        };
        assert_eq!(err.to_string(), "Invalid line number: 7 (source has 3 lines)");
    }
}
