//! Tokens command implementation.
//!
//! Lexes one input and prints the token stream, followed on stderr by any
//! diagnostics the lexer recorded.

use std::io::{self, Write};

use serde::Serialize;
use toyc_lex::{tokenize_with, KeywordTable, Lexer, Token, TokenKind, Truncation};
use toyc_util::Diagnostic;
use tracing::debug;

use crate::commands::common::{resolve_dialect, resolve_format, OutputFormat, SourceInput};
use crate::config::Config;
use crate::error::{Result, ToytError};

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Where to read source from.
    pub input: SourceInput,
    /// Output format override.
    pub format: Option<String>,
    /// Dialect override.
    pub dialect: Option<String>,
    /// Print spans in text output.
    pub spans: bool,
    /// Fail when any illegal token is produced.
    pub deny_illegal: bool,
}

/// Everything one lexing pass produced.
#[derive(Debug)]
pub struct TokenReport<'a> {
    /// Tokens, ending with one end-of-input token.
    pub tokens: Vec<Token<'a>>,
    /// Diagnostics in the order they were recorded.
    pub diagnostics: Vec<Diagnostic>,
    /// Why the input ended early, if it did.
    pub truncation: Option<Truncation>,
}

impl TokenReport<'_> {
    /// Number of illegal tokens.
    pub fn illegal_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Illegal)
            .count()
    }
}

/// JSON shape of one token.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    text: &'a str,
    start: usize,
    end: usize,
    line: u32,
    column: u32,
}

impl<'a> From<&Token<'a>> for TokenRecord<'a> {
    fn from(token: &Token<'a>) -> Self {
        Self {
            kind: token.kind.name(),
            text: token.text,
            start: token.span.start,
            end: token.span.end,
            line: token.span.line,
            column: token.span.column,
        }
    }
}

/// Lex `source` to completion with `keywords`.
pub fn lex_source(source: &str, keywords: KeywordTable) -> TokenReport<'_> {
    let mut lexer = Lexer::with_keyword_table(source, keywords);
    let tokens = tokenize_with(&mut lexer);
    TokenReport {
        tokens,
        truncation: lexer.truncation(),
        diagnostics: lexer.into_handler().into_diagnostics(),
    }
}

/// Write tokens one per line as `KIND "text"`, optionally prefixed with
/// `line:column`.
pub fn write_text<W: Write>(out: &mut W, tokens: &[Token<'_>], spans: bool) -> Result<()> {
    for token in tokens {
        if spans {
            write!(out, "{:<8} ", token.span.to_string())?;
        }
        writeln!(out, "{:<10} {:?}", token.kind.name(), token.text)?;
    }
    Ok(())
}

/// Write tokens as a pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, tokens: &[Token<'_>]) -> Result<()> {
    let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)?;
    Ok(())
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
    config: Config,
}

impl TokensCommand {
    /// Create a new TokensCommand.
    pub fn new(args: TokensArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Execute the command, printing to stdout and stderr.
    pub fn run(&self) -> Result<()> {
        let source = self.args.input.read()?;
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let report = self.execute(&source, &mut out)?;
        out.flush()?;

        let origin = self.args.input.origin();
        for diagnostic in &report.diagnostics {
            let rendered = diagnostic
                .render(&source, &origin)
                .unwrap_or_else(|_| diagnostic.to_string());
            eprintln!("{}", rendered);
        }

        self.check_illegal(&report)
    }

    /// Lex `source` and write the listing to `out`.
    pub fn execute<'a, W: Write>(&self, source: &'a str, out: &mut W) -> Result<TokenReport<'a>> {
        let dialect = resolve_dialect(self.args.dialect.as_deref(), &self.config)?;
        let format = resolve_format(self.args.format.as_deref(), &self.config)?;
        let keywords = self.config.keyword_table(dialect)?;
        debug!(%dialect, %format, keywords = keywords.len(), bytes = source.len(), "lexing");

        let report = lex_source(source, keywords);
        debug!(
            tokens = report.tokens.len(),
            diagnostics = report.diagnostics.len(),
            truncation = ?report.truncation,
            "lexed"
        );

        match format {
            OutputFormat::Text => write_text(out, &report.tokens, self.show_spans())?,
            OutputFormat::Json => write_json(out, &report.tokens)?,
        }
        Ok(report)
    }

    fn show_spans(&self) -> bool {
        self.args.spans || self.config.show_spans
    }

    fn check_illegal(&self, report: &TokenReport<'_>) -> Result<()> {
        let illegal = report.illegal_count();
        if illegal > 0 && (self.args.deny_illegal || self.config.deny_illegal) {
            return Err(ToytError::IllegalTokens(illegal));
        }
        Ok(())
    }
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs, config: Config) -> Result<()> {
    TokensCommand::new(args, config).run()
}
