//! String literal lexing.

use crate::lexer::Truncation;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a double-quoted string literal.
    ///
    /// The token text is the raw content between the quotes. A backslash
    /// skips the byte after it, so `\"` does not close the literal, but no
    /// escape is interpreted. The span covers both quotes.
    ///
    /// If input ends first, the text is everything after the opening quote
    /// and the truncation is reported.
    pub(crate) fn lex_string(&mut self) -> Token<'a> {
        let start = self.token_span();
        self.cursor.read_char();
        let content_start = self.cursor.position();

        loop {
            if self.cursor.is_at_end() {
                self.report_truncation(Truncation::UnterminatedString, start);
                let text = self.cursor.slice_from(content_start);
                return Token::new(TokenKind::String, text, self.token_span());
            }
            match self.cursor.ch() {
                b'"' => break,
                b'\\' => {
                    self.cursor.read_char();
                    self.cursor.read_char();
                },
                _ => self.cursor.read_char(),
            }
        }

        let text = self.cursor.slice_from(content_start);
        self.cursor.read_char();
        Token::new(TokenKind::String, text, self.token_span())
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::Truncation;
    use crate::token::TokenKind;
    use crate::Lexer;
    use toyc_util::{DiagnosticCode, Span};

    #[test]
    fn test_simple_string() {
        let mut lexer = Lexer::new("\"hello world\";");
        let token = lexer.next_token();
        assert_eq!((token.kind, token.text), (TokenKind::String, "hello world"));
        assert_eq!(token.span, Span::new(0, 13, 1, 1));
        assert_eq!(lexer.position(), 13);
        assert_eq!(lexer.next_token().kind, TokenKind::Semicolon);
    }

    #[test]
    fn test_empty_string() {
        let mut lexer = Lexer::new("\"\"");
        let token = lexer.next_token();
        assert_eq!((token.kind, token.text), (TokenKind::String, ""));
        assert_eq!(token.span.len(), 2);
    }

    #[test]
    fn test_escapes_are_left_raw() {
        let mut lexer = Lexer::new(r#""a\"b" "\n\t\\""#);
        let first = lexer.next_token();
        assert_eq!(first.text, r#"a\"b"#);
        assert_eq!(lexer.position(), 6);
        let second = lexer.next_token();
        assert_eq!(second.text, r#"\n\t\\"#);
        assert!(lexer.next_token().is_eof());
        assert!(lexer.diagnostics().is_empty());
    }

    #[test]
    fn test_string_spans_lines() {
        let mut lexer = Lexer::new("\"a\nb\" x");
        let token = lexer.next_token();
        assert_eq!(token.text, "a\nb");
        let x = lexer.next_token();
        assert_eq!((x.span.line, x.span.column), (2, 4));
    }

    #[test]
    fn test_string_with_multibyte_content() {
        let mut lexer = Lexer::new("\"héllo\"x");
        assert_eq!(lexer.next_token().text, "héllo");
        assert_eq!(lexer.next_token().span.column, 8);
    }

    #[test]
    fn test_unterminated_string() {
        let mut lexer = Lexer::new("let s = \"abc");
        let kinds: Vec<_> = lexer.by_ref().map(|t| (t.kind, t.text)).collect();
        assert_eq!(kinds.last(), Some(&(TokenKind::String, "abc")));
        assert!(lexer.next_token().is_eof());
        assert_eq!(lexer.truncation(), Some(Truncation::UnterminatedString));

        let diags = lexer.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEXER_UNTERMINATED_STRING));
        assert_eq!(diags[0].span, Span::new(8, 12, 1, 9));
    }

    #[test]
    fn test_trailing_backslash_in_unterminated_string() {
        let mut lexer = Lexer::new("\"ab\\");
        let token = lexer.next_token();
        assert_eq!((token.kind, token.text), (TokenKind::String, "ab\\"));
        assert_eq!(lexer.position(), 4);
        assert!(lexer.next_token().is_eof());
    }
}
