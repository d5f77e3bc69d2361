//! Command modules for the toyt CLI.
//!
//! Each subcommand is implemented in its own file; shared types live in
//! `common`.

pub mod common;

pub mod init;
pub mod keywords;
pub mod tokens;

// Re-export command types and functions
pub use init::{run_init, InitArgs};
pub use keywords::{run_keywords, KeywordsArgs};
pub use tokens::{run_tokens, TokensArgs};
