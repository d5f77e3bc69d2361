//! toyc-lex - Lexical Analyzer for the toy language
//!
//! This crate turns source text into a stream of classified tokens that a
//! parser pulls one at a time.
//!
//! # Example Usage
//!
//! ```
//! use toyc_lex::{Lexer, TokenKind};
//!
//! let source = "let five = 5;";
//! let mut lexer = Lexer::new(source);
//!
//! // Get tokens one at a time
//! let token = lexer.next_token();
//! assert_eq!((token.kind, token.text), (TokenKind::Let, "let"));
//!
//! // Or iterate through the rest
//! let rest: Vec<_> = lexer.map(|t| t.kind).collect();
//! assert_eq!(
//!     rest,
//!     vec![TokenKind::Ident, TokenKind::Assign, TokenKind::Int, TokenKind::Semicolon]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - token kinds, tokens, keyword tables and dialects
//! - [`lexer`] - the lexer itself
//! - [`cursor`] - byte cursor for source traversal
//! - [`stream`] - the pull interface a parser consumes
//! - [`error`] - keyword-table errors
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! Which spellings are reserved depends on the [`KeywordTable`]. The
//! standard dialect reserves `func`, `fn`, `let`, `const`, `var`, `true`,
//! `false`, `null`, `if`, `else`, `return`, `for` and `while`. The Go
//! dialect reserves the 25 Go keywords.
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`
//!
//! ## Literals
//!
//! - **Integer**: `42`
//! - **Float**: `3.14`
//! - **String**: `"hello"`, text is the raw content between the quotes
//!
//! ## Operators
//!
//! `=` `+` `-` `!` `*` `/` `<` `>` `==` `!=` `<=` `>=` `&` `&&` `|` `||`
//!
//! ## Delimiters
//!
//! `,` `;` `:` `.` `(` `)` `{` `}` `[` `]`
//!
//! ## Special
//!
//! - **EOF**: end of input, returned on every call once the input is used up
//! - **ILLEGAL**: a character no rule accepts
//!
//! Whitespace, `// line` comments and `/* block */` comments are skipped.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod stream;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{KeywordError, KeywordResult};
pub use lexer::{Lexer, Truncation};
pub use stream::{TokenBuffer, TokenSource};
pub use token::{Dialect, KeywordTable, Token, TokenKind};

/// Lex all of `source` with the standard keyword table.
///
/// The returned tokens end with exactly one [`TokenKind::Eof`].
///
/// ```
/// use toyc_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("a + 1");
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[3].kind, TokenKind::Eof);
/// ```
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    tokenize_with(&mut Lexer::new(source))
}

/// Lex the rest of `lexer`'s input, ending with one [`TokenKind::Eof`].
///
/// The lexer is left at end of input with its diagnostics intact.
pub fn tokenize_with<'a>(lexer: &mut Lexer<'a>) -> Vec<Token<'a>> {
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        tokens.push(token);
        if token.is_eof() {
            return tokens;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to collect all tokens from source.
    fn lex_all(source: &str) -> Vec<(TokenKind, &str)> {
        Lexer::new(source).map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn test_let_statement() {
        assert_eq!(
            lex_all("let five = 5;"),
            vec![
                (TokenKind::Let, "let"),
                (TokenKind::Ident, "five"),
                (TokenKind::Assign, "="),
                (TokenKind::Int, "5"),
                (TokenKind::Semicolon, ";"),
            ]
        );
    }

    #[test]
    fn test_function_literal() {
        let source = "let add = fn(x, y) {\n  x + y;\n};\nlet result = add(five, ten);";
        let kinds: Vec<_> = lex_all(source).into_iter().map(|(k, _)| k).collect();
        use TokenKind::*;
        assert_eq!(
            kinds,
            vec![
                Let, Ident, Assign, Func, LParen, Ident, Comma, Ident, RParen, LBrace, Ident,
                Plus, Ident, Semicolon, RBrace, Semicolon, Let, Ident, Assign, Ident, LParen,
                Ident, Comma, Ident, RParen, Semicolon,
            ]
        );
    }

    #[test]
    fn test_conditional_and_comparisons() {
        let source = r#"
            if (5 < 10) {
                return true;
            } else {
                return false;
            }
            10 == 10; 10 != 9; !-/ *5;
            x <= y && y >= z || w;
        "#;
        use TokenKind::*;
        let kinds: Vec<_> = lex_all(source).into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            kinds,
            vec![
                If, LParen, Int, Lt, Int, RParen, LBrace, Return, True, Semicolon, RBrace, Else,
                LBrace, Return, False, Semicolon, RBrace, Int, Eq, Int, Semicolon, Int, NotEq,
                Int, Semicolon, Bang, Minus, Slash, Asterisk, Int, Semicolon, Ident, LtEq,
                Ident, And, Ident, GtEq, Ident, Or, Ident, Semicolon,
            ]
        );
    }

    #[test]
    fn test_strings_arrays_and_maps() {
        assert_eq!(
            lex_all(r#""foobar" "foo bar" [1, 2]; {"foo": "bar"}"#),
            vec![
                (TokenKind::String, "foobar"),
                (TokenKind::String, "foo bar"),
                (TokenKind::LBracket, "["),
                (TokenKind::Int, "1"),
                (TokenKind::Comma, ","),
                (TokenKind::Int, "2"),
                (TokenKind::RBracket, "]"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::LBrace, "{"),
                (TokenKind::String, "foo"),
                (TokenKind::Colon, ":"),
                (TokenKind::String, "bar"),
                (TokenKind::RBrace, "}"),
            ]
        );
    }

    #[test]
    fn test_tokenize_ends_with_single_eof() {
        let tokens = tokenize("x;");
        assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        assert_eq!(tokenize("").len(), 1);
    }

    #[test]
    fn test_tokenize_with_dialect() {
        let go = KeywordTable::for_dialect(Dialect::Go);
        let mut lexer = Lexer::with_keywords("type T struct {}", &go);
        let tokens = tokenize_with(&mut lexer);
        assert!(lexer.next_token().is_eof());
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Type,
                TokenKind::Ident,
                TokenKind::Struct,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::Eof,
            ]
        );
    }
}
