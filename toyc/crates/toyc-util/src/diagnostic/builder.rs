//! Diagnostic builder and source snippets.
//!
//! [`DiagnosticBuilder`] constructs diagnostics with a fluent API.
//! [`SourceSnippet`] extracts the source line a span points at and renders
//! it with a caret underline.

use super::{Diagnostic, DiagnosticCode, Level, Span};
use crate::error::{DiagnosticError, DiagnosticResult};

/// A source line with a highlighted column range
///
/// # Examples
///
/// ```
/// use toyc_util::diagnostic::SourceSnippet;
/// use toyc_util::Span;
///
/// let source = "let x = @;";
/// let snippet = SourceSnippet::from_source(source, Span::new(8, 9, 1, 9)).unwrap();
/// assert_eq!(snippet.line, "let x = @;");
/// assert_eq!(snippet.start_column, 9);
/// assert_eq!(snippet.end_column, 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content, without its line terminator
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the highlight starts (1-based)
    pub start_column: usize,
    /// Column where the highlight ends (1-based, exclusive)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
        }
    }

    /// Extract the line `span` starts on from `source`
    ///
    /// The highlight covers the span's characters up to the end of that
    /// line, and at least one column.
    ///
    /// # Errors
    ///
    /// Returns [`DiagnosticError::SpanOutOfBounds`] when the span does not
    /// fit in `source`, and [`DiagnosticError::InvalidLineNumber`] when the
    /// span names a line `source` does not have.
    pub fn from_source(source: &str, span: Span) -> DiagnosticResult<Self> {
        if span.start > span.end || span.end > source.len() {
            return Err(DiagnosticError::SpanOutOfBounds {
                source_len: source.len(),
                span_start: span.start,
                span_end: span.end,
            });
        }

        let line_number = span.line as usize;
        let max_lines = source.split('\n').count();
        let line = line_number
            .checked_sub(1)
            .and_then(|index| source.split('\n').nth(index))
            .ok_or(DiagnosticError::InvalidLineNumber {
                line: line_number,
                max_lines,
            })?;
        let line = line.strip_suffix('\r').unwrap_or(line);

        let width = span
            .slice(source)
            .map(|text| text.split('\n').next().unwrap_or("").chars().count())
            .unwrap_or(1)
            .max(1);
        let start_column = (span.column as usize).max(1);

        Ok(Self::new(line, line_number, start_column, start_column + width))
    }

    /// Format the snippet for display
    ///
    /// # Examples
    ///
    /// ```
    /// use toyc_util::diagnostic::SourceSnippet;
    ///
    /// let snippet = SourceSnippet::new("let x = @;", 1, 9, 10);
    /// assert_eq!(snippet.format(), "  1 | let x = @;\n    |         ^");
    /// ```
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        let mut result = format!("{:>width$} | {}\n", self.line_number, self.line);
        result.push_str(&format!("{:>width$} | ", ""));
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));
        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use toyc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use toyc_util::Span;
///
/// let diag = DiagnosticBuilder::warning("unterminated string literal")
///     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
///     .span(Span::new(0, 4, 1, 1))
///     .help("add a closing `\"`")
///     .build();
///
/// assert_eq!(diag.level, Level::Warning);
/// assert_eq!(diag.helps.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Start a diagnostic of the given level
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Start an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Start a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the source location
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Finish building
    pub fn build(self) -> Diagnostic {
        let mut diagnostic = Diagnostic::new(self.level, self.message, self.span);
        diagnostic.code = self.code;
        diagnostic.notes = self.notes;
        diagnostic.helps = self.helps;
        diagnostic
    }
}
