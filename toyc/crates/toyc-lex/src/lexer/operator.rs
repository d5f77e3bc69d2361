//! Operator and delimiter lexing.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a one-character operator or delimiter.
    pub(crate) fn lex_single(&mut self, kind: TokenKind) -> Token<'a> {
        self.cursor.read_char();
        self.make_token(kind)
    }

    /// Lexes an operator that may pair with one following byte.
    ///
    /// Handles: `=`/`==`, `!`/`!=`, `<`/`<=`, `>`/`>=`, `&`/`&&`, `|`/`||`
    pub(crate) fn lex_pair(&mut self, second: u8, paired: TokenKind, single: TokenKind) -> Token<'a> {
        self.cursor.read_char();
        if self.cursor.ch() == second {
            self.cursor.read_char();
            self.make_token(paired)
        } else {
            self.make_token(single)
        }
    }
}
