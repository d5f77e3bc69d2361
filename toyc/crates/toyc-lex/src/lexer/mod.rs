//! Lexer module.
//!
//! The implementation is split into small, focused components:
//! - `core` - Lexer struct, dispatch and diagnostics
//! - `comment` - whitespace and comment skipping
//! - `identifier` - identifier and keyword lexing
//! - `number` - integer and float literal lexing
//! - `string` - string literal lexing
//! - `operator` - operator and delimiter lexing

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::{Lexer, Truncation};
