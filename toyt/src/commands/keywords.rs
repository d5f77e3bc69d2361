//! Keywords command implementation.
//!
//! Prints the effective keyword table: the selected dialect plus the
//! extra keywords from the configuration.

use std::io::{self, Write};

use toyc_lex::KeywordTable;

use crate::commands::common::resolve_dialect;
use crate::config::Config;
use crate::error::Result;

/// Arguments for the keywords command.
#[derive(Debug, Clone, Default)]
pub struct KeywordsArgs {
    /// Dialect override.
    pub dialect: Option<String>,
}

/// Build the table the tokens command would use.
pub fn effective_table(args: &KeywordsArgs, config: &Config) -> Result<KeywordTable> {
    let dialect = resolve_dialect(args.dialect.as_deref(), config)?;
    config.keyword_table(dialect)
}

/// Write `spelling KIND` lines, sorted by spelling.
pub fn write_table<W: Write>(out: &mut W, table: &KeywordTable) -> Result<()> {
    for (word, kind) in table.iter() {
        writeln!(out, "{:<12} {}", word, kind)?;
    }
    Ok(())
}

/// Run the keywords command.
pub fn run_keywords(args: KeywordsArgs, config: Config) -> Result<()> {
    let table = effective_table(&args, &config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_table(&mut out, &table)?;
    out.flush()?;
    Ok(())
}
