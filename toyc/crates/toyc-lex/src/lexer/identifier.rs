//! Identifier and keyword lexing.

use crate::lexer::core::is_ident_continue;
use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes `[A-Za-z0-9_]*` after the start byte, then resolves the
    /// spelling against the keyword table. Only an exact match is a keyword.
    pub(crate) fn lex_identifier(&mut self) -> Token<'a> {
        while is_ident_continue(self.cursor.ch()) {
            self.cursor.read_char();
        }
        let text = self.cursor.slice_from(self.token_start);
        let kind = self.keywords().lookup_ident(text);
        Token::new(kind, text, self.token_span())
    }
}
