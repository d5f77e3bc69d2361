//! Property-based tests for toyc-lex

use proptest::prelude::*;
use toyc_lex::{tokenize, tokenize_with, Lexer, Token, TokenKind};

fn lex_tokens(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).collect()
}

/// True when `gap` is nothing but whitespace, `//` comments and
/// `/* */` comments (the last one may run to the end).
fn is_trivia(gap: &str) -> bool {
    let mut rest = gap;
    loop {
        rest = rest.trim_start_matches([' ', '\t', '\n', '\r']);
        if rest.is_empty() {
            return true;
        }
        if let Some(comment) = rest.strip_prefix("//") {
            rest = comment.find('\n').map_or("", |end| &comment[end..]);
        } else if let Some(comment) = rest.strip_prefix("/*") {
            rest = comment.find("*/").map_or("", |end| &comment[end + 2..]);
        } else {
            return false;
        }
    }
}

#[test]
fn test_property_any_input_terminates_with_stable_eof() {
    proptest!(|(input in "\\PC{0,200}")| {
        let mut lexer = Lexer::new(&input);
        let mut count = 0;
        while !lexer.next_token().is_eof() {
            count += 1;
            // every token consumes at least one byte
            prop_assert!(count <= input.len());
        }
        for _ in 0..3 {
            let eof = lexer.next_token();
            prop_assert_eq!(eof.kind, TokenKind::Eof);
            prop_assert_eq!(eof.text, "");
            prop_assert_eq!(eof.span.start, input.len());
        }
    });
}

#[test]
fn test_property_non_whitespace_bytes_covered_exactly_once() {
    proptest!(|(input in "[-a-z0-9 \t\n;=!<>&|+*.,(){}@#]{0,120}")| {
        let tokens = lex_tokens(&input);
        let mut covered = vec![0u32; input.len()];
        let mut last_end = 0;
        for token in &tokens {
            prop_assert!(token.span.start >= last_end);
            prop_assert!(token.span.end > token.span.start);
            prop_assert_eq!(&input[token.span.start..token.span.end], token.text);
            for byte in covered.iter_mut().take(token.span.end).skip(token.span.start) {
                *byte += 1;
            }
            last_end = token.span.end;
        }
        for (i, b) in input.bytes().enumerate() {
            let expected = if matches!(b, b' ' | b'\t' | b'\n' | b'\r') { 0 } else { 1 };
            prop_assert_eq!(covered[i], expected, "byte {} of {:?}", i, input);
        }
    });
}

#[test]
fn test_property_identifier_strings() {
    proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,60}")| {
        let tokens = lex_tokens(&input);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].text, input.as_str());
        prop_assert!(tokens[0].kind == TokenKind::Ident || tokens[0].kind.is_keyword());
    });
}

#[test]
fn test_property_number_strings() {
    proptest!(|(int in "[0-9]{1,20}", frac in "[0-9]{1,10}")| {
        let tokens = lex_tokens(&int);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Int);

        let float = format!("{}.{}", int, frac);
        let tokens = lex_tokens(&float);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Float);
        prop_assert_eq!(tokens[0].text, float.as_str());
    });
}

#[test]
fn test_property_string_literals() {
    proptest!(|(input in "[^\"\\\\]{0,80}")| {
        let source = format!("\"{}\"", input);
        let tokens = tokenize(&source);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::String);
        prop_assert_eq!(tokens[0].text, input.as_str());
        prop_assert_eq!(tokens[0].span.len(), source.len());
    });
}

#[test]
fn test_property_comments_strings_and_multibyte_input() {
    let config = ProptestConfig::with_cases(2048);
    proptest!(config, |(input in "[-a-z0-9 \t\n\r;=!<>&|+*/.,\"\\\\@é€\\x00]{0,80}")| {
        let mut lexer = Lexer::new(&input);
        let tokens = tokenize_with(&mut lexer);
        prop_assert!(tokens.last().is_some_and(|t| t.is_eof()));

        let mut last_end = 0;
        for token in &tokens {
            prop_assert!(token.span.start >= last_end, "overlap at {:?} in {:?}", token, input);
            let gap = &input[last_end..token.span.start];
            prop_assert!(is_trivia(gap), "gap {:?} before {:?} in {:?}", gap, token, input);

            let lexeme = &input[token.span.start..token.span.end];
            match token.kind {
                TokenKind::Eof => prop_assert_eq!(token.span.start, input.len()),
                TokenKind::String => {
                    let body = lexeme.strip_prefix('"');
                    prop_assert!(body.is_some_and(|b| b.starts_with(token.text)));
                },
                _ => {
                    prop_assert!(token.span.end > token.span.start);
                    prop_assert_eq!(lexeme, token.text);
                },
            }
            last_end = token.span.end;
        }

        for diagnostic in lexer.diagnostics() {
            prop_assert!(
                diagnostic.render(&input, "<input>").is_ok(),
                "{} does not render against {:?}",
                diagnostic,
                input
            );
        }
    });
}
