//! toyc-util - Shared foundation types for the toyc toolchain
//!
//! This crate holds the pieces every toyc phase agrees on:
//!
//! - [`span`] - byte ranges with line/column information
//! - [`diagnostic`] - diagnostics, severity levels, codes and the [`Handler`]
//!   that collects them
//! - [`error`] - error types for the operations in this crate
//!
//! # Example
//!
//! ```
//! use toyc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! let diagnostic = DiagnosticBuilder::error("unexpected character '@'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(4, 5, 1, 5))
//!     .build();
//! handler.emit_diagnostic(diagnostic);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::{DiagnosticError, DiagnosticResult};
pub use span::Span;

// Re-export commonly used types
pub use rustc_hash::FxHashMap;
