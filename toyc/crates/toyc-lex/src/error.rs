//! Error types for keyword-table configuration.

use thiserror::Error;

use crate::token::TokenKind;

/// Errors raised while building a [`KeywordTable`](crate::KeywordTable) or
/// selecting a [`Dialect`](crate::Dialect).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeywordError {
    /// The word can never be lexed as a single identifier
    #[error("'{0}' is not a valid identifier spelling")]
    InvalidSpelling(String),

    /// The target kind is not a keyword kind
    #[error("cannot reserve '{word}' as {kind}: not a keyword kind")]
    NotAKeyword {
        /// Spelling that was being reserved
        word: String,
        /// Rejected kind
        kind: TokenKind,
    },

    /// No token kind has this name
    #[error("unknown token kind '{0}'")]
    UnknownKind(String),

    /// No keyword preset has this name
    #[error("unknown dialect '{0}' (expected 'standard' or 'go')")]
    UnknownDialect(String),
}

/// Result type alias for keyword-table operations
pub type KeywordResult<T> = std::result::Result<T, KeywordError>;
