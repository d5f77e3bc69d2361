//! The boundary between the lexer and a parser.
//!
//! A parser pulls tokens one at a time through [`TokenSource`] and looks at
//! most one token ahead. [`TokenBuffer`] keeps the current token and that
//! lookahead so the parser does not have to.

use std::mem;

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Anything that hands out tokens one at a time.
///
/// After the end of input, implementations keep returning
/// [`TokenKind::Eof`].
pub trait TokenSource<'a> {
    /// Produce the next token.
    fn next_token(&mut self) -> Token<'a>;
}

impl<'a> TokenSource<'a> for Lexer<'a> {
    fn next_token(&mut self) -> Token<'a> {
        Lexer::next_token(self)
    }
}

/// Current token plus one token of lookahead.
///
/// # Example
///
/// ```
/// use toyc_lex::{Lexer, TokenBuffer, TokenKind};
///
/// let mut tokens = TokenBuffer::new(Lexer::new("let x = 5;"));
/// assert!(tokens.current_is(TokenKind::Let));
/// assert!(tokens.peek_is(TokenKind::Ident));
///
/// let let_token = tokens.advance();
/// assert_eq!(let_token.text, "let");
/// assert_eq!(tokens.current().text, "x");
/// assert!(tokens.peek_is(TokenKind::Assign));
/// ```
#[derive(Debug)]
pub struct TokenBuffer<'a, S> {
    source: S,
    current: Token<'a>,
    peek: Token<'a>,
}

impl<'a, S: TokenSource<'a>> TokenBuffer<'a, S> {
    /// Pull two tokens from `source` to fill the current and peek slots.
    pub fn new(mut source: S) -> Self {
        let current = source.next_token();
        let peek = source.next_token();
        Self {
            source,
            current,
            peek,
        }
    }

    /// Shift the lookahead into the current slot and pull a new lookahead.
    ///
    /// Returns the token that was current.
    pub fn advance(&mut self) -> Token<'a> {
        let next = self.source.next_token();
        let peek = mem::replace(&mut self.peek, next);
        mem::replace(&mut self.current, peek)
    }

    /// The token under examination.
    pub fn current(&self) -> Token<'a> {
        self.current
    }

    /// The token after the current one.
    pub fn peek(&self) -> Token<'a> {
        self.peek
    }

    /// Returns true if the current token has kind `kind`.
    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Returns true if the lookahead token has kind `kind`.
    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Returns true once the current token is end of input.
    pub fn at_eof(&self) -> bool {
        self.current.is_eof()
    }

    /// Borrow the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Give back the underlying source.
    pub fn into_inner(self) -> S {
        self.source
    }
}
