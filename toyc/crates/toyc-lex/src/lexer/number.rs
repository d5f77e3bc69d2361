//! Number literal lexing.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an integer or float literal.
    ///
    /// Handles: `42`, `3.14`
    ///
    /// A `.` makes the literal a float only when a digit follows it, and
    /// only once: in `3.14.5` the second `.` is left for the next token.
    /// Signs and exponents are not part of the literal.
    pub(crate) fn lex_number(&mut self) -> Token<'a> {
        self.consume_digits();

        if self.cursor.ch() == b'.' && self.cursor.peek_char().is_ascii_digit() {
            self.cursor.read_char();
            self.consume_digits();
            return self.make_token(TokenKind::Float);
        }

        self.make_token(TokenKind::Int)
    }

    fn consume_digits(&mut self) {
        while self.cursor.ch().is_ascii_digit() {
            self.cursor.read_char();
        }
    }
}
