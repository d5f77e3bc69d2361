//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the per-token dispatch and
//! diagnostic reporting.

use std::borrow::Cow;
use std::fmt;
use std::iter::FusedIterator;

use toyc_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Span};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::token::{KeywordTable, Token, TokenKind};

/// Why the input ended early.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Truncation {
    /// End of input inside a string literal
    UnterminatedString,
    /// End of input inside a `/* ... */` comment
    UnterminatedBlockComment,
}

impl Truncation {
    /// The diagnostic code recorded for this truncation.
    pub fn code(self) -> DiagnosticCode {
        match self {
            Truncation::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            Truncation::UnterminatedBlockComment => DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
        }
    }
}

impl fmt::Display for Truncation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Truncation::UnterminatedString => write!(f, "unterminated string literal"),
            Truncation::UnterminatedBlockComment => write!(f, "unterminated block comment"),
        }
    }
}

/// Lexer for the toy language.
///
/// The lexer hands out one [`Token`] per call to
/// [`next_token`](Self::next_token). Once the input is exhausted every call
/// returns [`TokenKind::Eof`] with empty text. Problems never stop the
/// scan: an unknown character becomes a [`TokenKind::Illegal`] token, and
/// truncated strings or comments end quietly at end of input. Each problem
/// is also recorded as a diagnostic in the lexer's [`Handler`].
///
/// # Example
///
/// ```
/// use toyc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("x == 10");
/// assert_eq!(lexer.next_token().kind, TokenKind::Ident);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eq);
/// let ten = lexer.next_token();
/// assert_eq!((ten.kind, ten.text), (TokenKind::Int, "10"));
/// assert!(lexer.next_token().is_eof());
/// assert!(lexer.next_token().is_eof());
/// ```
pub struct Lexer<'a> {
    /// Byte cursor over the source.
    pub(crate) cursor: Cursor<'a>,

    /// Reserved spellings.
    keywords: Cow<'a, KeywordTable>,

    /// Diagnostics recorded so far.
    handler: Handler,

    /// Starting offset of the current token.
    pub(crate) token_start: usize,

    /// Line where the current token starts (1-based).
    token_start_line: u32,

    /// Column where the current token starts (1-based).
    token_start_column: u32,

    /// Set when input ended inside a string or block comment.
    truncation: Option<Truncation>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer using the standard keyword table.
    pub fn new(source: &'a str) -> Self {
        Self::from_parts(source, Cow::Owned(KeywordTable::standard()))
    }

    /// Creates a lexer that resolves identifiers against `keywords`.
    ///
    /// ```
    /// use toyc_lex::{KeywordTable, Lexer, TokenKind};
    ///
    /// let go = KeywordTable::go();
    /// let mut lexer = Lexer::with_keywords("package let", &go);
    /// assert_eq!(lexer.next_token().kind, TokenKind::Package);
    /// assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    /// ```
    pub fn with_keywords(source: &'a str, keywords: &'a KeywordTable) -> Self {
        Self::from_parts(source, Cow::Borrowed(keywords))
    }

    /// Creates a lexer that owns its keyword table.
    ///
    /// Tokens then borrow only from `source`.
    pub fn with_keyword_table(source: &'a str, keywords: KeywordTable) -> Self {
        Self::from_parts(source, Cow::Owned(keywords))
    }

    fn from_parts(source: &'a str, keywords: Cow<'a, KeywordTable>) -> Self {
        Self {
            cursor: Cursor::new(source),
            keywords,
            handler: Handler::new(),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            truncation: None,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace and comments, then dispatches on the current byte.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace_and_comments();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Token::new(TokenKind::Eof, "", self.token_span());
        }

        let token = match self.cursor.ch() {
            b'=' => self.lex_pair(b'=', TokenKind::Eq, TokenKind::Assign),
            b'!' => self.lex_pair(b'=', TokenKind::NotEq, TokenKind::Bang),
            b'<' => self.lex_pair(b'=', TokenKind::LtEq, TokenKind::Lt),
            b'>' => self.lex_pair(b'=', TokenKind::GtEq, TokenKind::Gt),
            b'&' => self.lex_pair(b'&', TokenKind::And, TokenKind::Ampersand),
            b'|' => self.lex_pair(b'|', TokenKind::Or, TokenKind::Pipe),
            b'+' => self.lex_single(TokenKind::Plus),
            b'-' => self.lex_single(TokenKind::Minus),
            b'*' => self.lex_single(TokenKind::Asterisk),
            b'/' => self.lex_single(TokenKind::Slash),
            b',' => self.lex_single(TokenKind::Comma),
            b';' => self.lex_single(TokenKind::Semicolon),
            b':' => self.lex_single(TokenKind::Colon),
            b'.' => self.lex_single(TokenKind::Dot),
            b'(' => self.lex_single(TokenKind::LParen),
            b')' => self.lex_single(TokenKind::RParen),
            b'{' => self.lex_single(TokenKind::LBrace),
            b'}' => self.lex_single(TokenKind::RBrace),
            b'[' => self.lex_single(TokenKind::LBracket),
            b']' => self.lex_single(TokenKind::RBracket),
            b'"' => self.lex_string(),
            c if is_ident_start(c) => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            _ => self.lex_illegal(),
        };

        trace!(
            kind = %token.kind,
            text = token.text,
            line = token.span.line,
            column = token.span.column,
            "token"
        );
        token
    }

    /// Lexes one character no rule accepts.
    ///
    /// A multi-byte character is consumed whole so the token text stays a
    /// valid `&str`.
    fn lex_illegal(&mut self) -> Token<'a> {
        let width = self.cursor.current_char().map_or(1, char::len_utf8);
        for _ in 0..width {
            self.cursor.read_char();
        }
        let token = self.make_token(TokenKind::Illegal);
        let message = format!("unexpected character '{}'", token.text.escape_default());
        self.report(
            self.handler
                .build_error(token.span, message)
                .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR),
        );
        token
    }

    /// Builds a token whose text is the source from the token start to the
    /// cursor.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token<'a> {
        Token::new(kind, self.cursor.slice_from(self.token_start), self.token_span())
    }

    /// Span from the token start to the cursor.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Records that input ended inside a string or comment starting at
    /// `start`.
    pub(crate) fn report_truncation(&mut self, truncation: Truncation, start: Span) {
        let span = Span::new(start.start, self.cursor.position(), start.line, start.column);
        self.truncation.get_or_insert(truncation);
        let help = match truncation {
            Truncation::UnterminatedString => "add a closing `\"`",
            Truncation::UnterminatedBlockComment => "add a closing `*/`",
        };
        self.report(
            self.handler
                .build_warning(span, truncation.to_string())
                .code(truncation.code())
                .note(format!("input ends at {}:{}", self.cursor.line(), self.cursor.column()))
                .help(help),
        );
    }

    fn report(&self, builder: DiagnosticBuilder) {
        let diagnostic = builder.build();
        debug!(
            code = ?diagnostic.code,
            line = diagnostic.span.line,
            column = diagnostic.span.column,
            "{}",
            diagnostic.message
        );
        self.handler.emit_diagnostic(diagnostic);
    }

    /// Returns the diagnostic handler.
    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Returns a copy of the diagnostics recorded so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.handler.diagnostics()
    }

    /// Returns true if an error-level diagnostic has been recorded.
    pub fn has_errors(&self) -> bool {
        self.handler.has_errors()
    }

    /// Consumes the lexer and returns its diagnostics handler.
    pub fn into_handler(self) -> Handler {
        self.handler
    }

    /// Returns why the input ended early, if it did.
    ///
    /// ```
    /// use toyc_lex::{Lexer, Truncation};
    ///
    /// let mut lexer = Lexer::new("/* never closed");
    /// assert!(lexer.next_token().is_eof());
    /// assert_eq!(lexer.truncation(), Some(Truncation::UnterminatedBlockComment));
    /// ```
    pub fn truncation(&self) -> Option<Truncation> {
        self.truncation
    }

    /// Returns the keyword table identifiers are resolved against.
    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    /// Returns the source being lexed.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("position", &self.cursor.position())
            .field("line", &self.cursor.line())
            .field("column", &self.cursor.column())
            .field("keywords", &self.keywords.len())
            .field("diagnostics", &self.handler.diagnostics().len())
            .field("truncation", &self.truncation)
            .finish()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// `[A-Za-z_]`
#[inline]
pub(crate) fn is_ident_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

/// `[A-Za-z0-9_]`
#[inline]
pub(crate) fn is_ident_continue(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}
