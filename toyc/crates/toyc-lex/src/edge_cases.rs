//! Edge case tests for toyc-lex

#[cfg(test)]
mod tests {
    use crate::{Lexer, Token, TokenKind, Truncation};
    use toyc_util::{DiagnosticCode, Level};

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            if token.is_eof() {
                break;
            }
            tokens.push(token);
        }
        tokens
    }

    fn pairs(source: &str) -> Vec<(TokenKind, &str)> {
        lex_all(source).into_iter().map(|t| (t.kind, t.text)).collect()
    }

    // ==================== END OF INPUT ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
        assert!(lex_all(" \n\t\r ").is_empty());
    }

    #[test]
    fn test_edge_eof_is_idempotent() {
        let mut lexer = Lexer::new("x");
        lexer.next_token();
        let first = lexer.next_token();
        for _ in 0..5 {
            let again = lexer.next_token();
            assert_eq!(again, first);
            assert_eq!(again.kind, TokenKind::Eof);
            assert_eq!(again.text, "");
        }
        assert_eq!(lexer.position(), 1);
    }

    // ==================== OPERATORS ====================

    #[test]
    fn test_edge_double_equals_is_one_token() {
        assert_eq!(pairs("=="), vec![(TokenKind::Eq, "==")]);
        assert_eq!(pairs("= ="), vec![(TokenKind::Assign, "="), (TokenKind::Assign, "=")]);
    }

    // ==================== LITERALS ====================

    #[test]
    fn test_edge_float_then_dot_then_int() {
        assert_eq!(
            pairs("3.14.5"),
            vec![(TokenKind::Float, "3.14"), (TokenKind::Dot, "."), (TokenKind::Int, "5")]
        );
    }

    #[test]
    fn test_edge_keyword_prefix() {
        assert_eq!(
            pairs("let letx = 5;"),
            vec![
                (TokenKind::Let, "let"),
                (TokenKind::Ident, "letx"),
                (TokenKind::Assign, "="),
                (TokenKind::Int, "5"),
                (TokenKind::Semicolon, ";"),
            ]
        );
    }

    #[test]
    fn test_edge_escaped_quote_in_string() {
        let source = "\"a\\\"b\"";
        let mut lexer = Lexer::new(source);
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.text, "a\\\"b");
        assert_eq!(lexer.position(), source.len());
        assert!(lexer.next_token().is_eof());
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let source = format!("let {} = 1;", name);
        let tokens = lex_all(&source);
        assert_eq!(tokens[1].text, name);
        assert_eq!(tokens[1].kind, TokenKind::Ident);
    }

    // ==================== TRUNCATION ====================

    #[test]
    fn test_edge_unterminated_block_comment_alone() {
        let mut lexer = Lexer::new("/* comment");
        assert!(lexer.next_token().is_eof());
        assert_eq!(lexer.truncation(), Some(Truncation::UnterminatedBlockComment));
        assert!(!lexer.has_errors());
        assert!(lexer
            .diagnostics()
            .iter()
            .all(|d| d.code != Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)));
    }

    #[test]
    fn test_edge_well_formed_input_has_no_truncation() {
        let mut lexer = Lexer::new("\"done\" /* closed */");
        while !lexer.next_token().is_eof() {}
        assert_eq!(lexer.truncation(), None);
    }

    // ==================== ILLEGAL ====================

    #[test]
    fn test_edge_illegal_backtick_and_at() {
        for source in ["a ` b", "a @ b"] {
            let mut lexer = Lexer::new(source);
            let kinds: Vec<_> = lexer.by_ref().map(|t| t.kind).collect();
            assert_eq!(kinds, vec![TokenKind::Ident, TokenKind::Illegal, TokenKind::Ident]);
            let diags = lexer.diagnostics();
            assert_eq!(diags.len(), 1);
            assert_eq!(diags[0].level, Level::Error);
        }
    }

    #[test]
    fn test_edge_adjacent_illegal_characters() {
        assert_eq!(
            pairs("@#$"),
            vec![
                (TokenKind::Illegal, "@"),
                (TokenKind::Illegal, "#"),
                (TokenKind::Illegal, "$"),
            ]
        );
    }

    #[test]
    fn test_edge_non_ascii_letters_are_illegal() {
        assert_eq!(
            pairs("naïve"),
            vec![
                (TokenKind::Ident, "na"),
                (TokenKind::Illegal, "ï"),
                (TokenKind::Ident, "ve"),
            ]
        );
    }

    // ==================== SPANS ====================

    #[test]
    fn test_edge_spans_increase_and_do_not_overlap() {
        let source = "let s = \"x y\"; // c\n/* d */ if (a >= 3.5) { @ }";
        let tokens = lex_all(source);
        for pair in tokens.windows(2) {
            assert!(pair[0].span.end <= pair[1].span.start);
        }
        for token in &tokens {
            let lexeme = &source[token.span.start..token.span.end];
            if token.kind == TokenKind::String {
                assert_eq!(lexeme, format!("\"{}\"", token.text));
            } else {
                assert_eq!(lexeme, token.text);
            }
        }
    }

    #[test]
    fn test_edge_crlf_line_numbers() {
        let tokens = lex_all("a\r\nb\r\n\r\nc");
        let lines: Vec<_> = tokens.iter().map(|t| (t.span.line, t.span.column)).collect();
        assert_eq!(lines, vec![(1, 1), (2, 1), (4, 1)]);
    }
}
