//! Lexer and front-end diagnostics.
//!
//! A [`Diagnostic`] pairs a message with the [`Span`] it is about. Phases
//! record them into a [`Handler`]; callers render them against the source
//! text once the phase is done.
//!
//! # Examples
//!
//! ```
//! use toyc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use toyc_util::Span;
//!
//! let handler = Handler::new();
//! let diagnostic = DiagnosticBuilder::error("unexpected character '`'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(2, 3, 1, 3))
//!     .build();
//! handler.emit_diagnostic(diagnostic);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use codes::{E_LEXER_UNEXPECTED_CHAR, E_LEXER_UNTERMINATED_COMMENT, E_LEXER_UNTERMINATED_STRING};

use crate::error::DiagnosticResult;
use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// How serious a diagnostic is
///
/// # Examples
///
/// ```
/// use toyc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert!(Level::Error.is_error());
/// assert!(!Level::Warning.is_error());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// A problem the consumer should treat as fatal
    Error,
    /// Suspicious input that still produced a usable token stream
    Warning,
    /// Context attached to another diagnostic
    Note,
    /// A suggested fix
    Help,
}

impl Level {
    /// Returns true for [`Level::Error`]
    #[inline]
    pub fn is_error(self) -> bool {
        self == Level::Error
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// One reported problem, anchored to a span of source text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity
    pub level: Level,
    /// Headline, e.g. `unexpected character '@'`
    pub message: String,
    /// Where the problem is; [`Span::DUMMY`] when unknown
    pub span: Span,
    /// Stable code such as `E1001`
    pub code: Option<DiagnosticCode>,
    /// `= note:` lines
    pub notes: Vec<String>,
    /// `= help:` lines
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// A diagnostic with no code, notes or helps
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// The one-line header, e.g. `error[E1001]: unexpected character '@'`
    pub fn header(&self) -> String {
        match self.code {
            Some(code) => format!("{}[{}]: {}", self.level, code, self.message),
            None => format!("{}: {}", self.level, self.message),
        }
    }

    /// Render the diagnostic against the source it was reported for
    ///
    /// `origin` names the input (a file path or `<stdin>`) in the location
    /// line. Diagnostics with [`Span::DUMMY`] render without a snippet.
    ///
    /// # Errors
    ///
    /// Fails when the span does not describe a location in `source`.
    ///
    /// # Examples
    ///
    /// ```
    /// use toyc_util::{Diagnostic, Level, Span};
    ///
    /// let source = "let @ = 1;";
    /// let diag = Diagnostic::new(Level::Error, "unexpected character '@'", Span::new(4, 5, 1, 5));
    /// let text = diag.render(source, "main.toy").unwrap();
    /// assert!(text.starts_with("error: unexpected character '@'\n  --> main.toy:1:5\n"));
    /// assert!(text.ends_with("|     ^"));
    /// ```
    pub fn render(&self, source: &str, origin: &str) -> DiagnosticResult<String> {
        let mut out = self.header();
        if !self.span.is_dummy() {
            let snippet = SourceSnippet::from_source(source, self.span)?;
            out.push_str(&format!("\n  --> {}:{}\n", origin, self.span));
            out.push_str(&snippet.format());
        }
        for note in &self.notes {
            out.push_str(&format!("\n  = note: {}", note));
        }
        for help in &self.helps {
            out.push_str(&format!("\n  = help: {}", help));
        }
        Ok(out)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.span.is_dummy() {
            write!(f, "{}", self.header())
        } else {
            write!(f, "{} at {}", self.header(), self.span)
        }
    }
}

/// Collects diagnostics in the order they are reported
///
/// The handler only needs a shared reference to record a diagnostic, so a
/// phase can keep one and hand `&Handler` to helpers.
///
/// # Examples
///
/// ```
/// use toyc_util::{Handler, Span};
///
/// let handler = Handler::new();
/// let diagnostic = handler
///     .build_warning(Span::new(0, 5, 1, 1), "unterminated string literal")
///     .build();
/// handler.emit_diagnostic(diagnostic);
///
/// assert!(!handler.has_errors());
/// assert_eq!(handler.warning_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// An empty handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Record `diagnostic`
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Start an error diagnostic at `span`
    ///
    /// # Examples
    ///
    /// ```
    /// use toyc_util::{DiagnosticCode, Handler, Span};
    ///
    /// let handler = Handler::new();
    /// let diagnostic = handler
    ///     .build_error(Span::new(0, 1, 1, 1), "unexpected character '$'")
    ///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
    ///     .build();
    /// handler.emit_diagnostic(diagnostic);
    /// assert!(handler.has_errors());
    /// ```
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    /// Start a warning diagnostic at `span`
    pub fn build_warning(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message).span(span)
    }

    /// Whether an error-level diagnostic was recorded
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    /// Error-level count
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Warning-level count
    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Returns true if nothing has been reported
    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// A snapshot of everything recorded so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Consume the handler and return its diagnostics
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_inner()
    }
}
