//! Common types and utilities for toyt commands.
//!
//! This module provides the output format, the input source and the
//! settings resolution shared by the command implementations.

use std::fmt;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

use toyc_lex::Dialect;

use crate::config::Config;
use crate::error::{Result, ToytError};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for token listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One token per line
    Text,
    /// A JSON array of token records
    Json,
}

impl OutputFormat {
    /// Lower-case name used on the command line and in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ToytError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ToytError::Validation(format!(
                "unknown output format '{}' (expected 'text' or 'json')",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Input Source
// ============================================================================

/// Where the source text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceInput {
    /// A file on disk
    File(PathBuf),
    /// Source given inline on the command line
    Expr(String),
    /// Standard input
    Stdin,
}

impl SourceInput {
    /// Pick the input from the command-line arguments.
    ///
    /// An inline expression wins over a file; with neither, read stdin.
    pub fn from_args(file: Option<PathBuf>, expr: Option<String>) -> Self {
        match (expr, file) {
            (Some(expr), _) => Self::Expr(expr),
            (None, Some(path)) => Self::File(path),
            (None, None) => Self::Stdin,
        }
    }

    /// Name used in diagnostics.
    pub fn origin(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Expr(_) => "<expr>".to_string(),
            Self::Stdin => "<stdin>".to_string(),
        }
    }

    /// Read the whole source.
    ///
    /// # Errors
    ///
    /// Fails if the input cannot be read or is not valid UTF-8.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::File(path) => {
                if !path.is_file() {
                    return Err(ToytError::Validation(format!(
                        "input file not found: {}",
                        path.display()
                    )));
                }
                Ok(std::fs::read_to_string(path)?)
            },
            Self::Expr(source) => Ok(source.clone()),
            Self::Stdin => {
                let mut source = String::new();
                std::io::stdin().read_to_string(&mut source)?;
                Ok(source)
            },
        }
    }
}

// ============================================================================
// Settings
// ============================================================================

/// The dialect from the command line, falling back to the configuration.
pub fn resolve_dialect(flag: Option<&str>, config: &Config) -> Result<Dialect> {
    match flag {
        Some(name) => Ok(name.parse::<Dialect>()?),
        None => config.dialect(),
    }
}

/// The output format from the command line, falling back to the
/// configuration.
pub fn resolve_format(flag: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match flag {
        Some(name) => name.parse(),
        None => config.output_format(),
    }
}
