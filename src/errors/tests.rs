//! Unit tests for error handling.
//!
//! This module contains tests for error types, tips and source rendering.

use crate::errors::errors::{render_error, Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::Illegal,
        },
        Position(10),
    );

    assert_eq!(error.get_error_name(), "NoPrefixParseFn");
    assert_eq!(error.get_position().0, 10);
}

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assign,
            found: TokenKind::IntegerLiteral,
        },
        Position(0),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.to_string(),
        "expected next token to be =, got INT instead"
    );
}

#[test]
fn test_no_prefix_message() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::Illegal,
        },
        Position(0),
    );

    assert_eq!(error.to_string(), "no prefix parse function for ILLEGAL found");
}

#[test]
fn test_integer_parse_message() {
    let error = Error::new(
        ErrorImpl::IntegerParse {
            literal: "99999999999999999999".to_string(),
        },
        Position(0),
    );

    assert_eq!(error.get_error_name(), "IntegerParse");
    assert_eq!(
        error.to_string(),
        "could not parse 99999999999999999999 as integer"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            found: TokenKind::IntegerLiteral,
        },
        Position(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_unclosed_bracket() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::RParen,
            found: TokenKind::EndOfInput,
        },
        Position(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("unclosed")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_render_error() {
    let source = "maanlo a = 1;\n    maanlo x 5;\n";
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assign,
            found: TokenKind::IntegerLiteral,
        },
        Position(27),
    );

    let rendered = render_error(&error, source, "test.lang");

    assert_eq!(
        rendered,
        "Error: UnexpectedToken: expected next token to be =, got INT instead\n\
         -> test.lang\n\
         \x20 |\n\
         2 | maanlo x 5;\n\
         \x20 | ---------^\n"
    );
}

#[test]
fn test_render_error_out_of_range_position() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::RBrace,
        },
        Position(100),
    );

    let rendered = render_error(&error, "}", "repl");

    assert_eq!(
        rendered,
        "Error: NoPrefixParseFn: no prefix parse function for } found (`}` cannot start an expression)\n-> repl\n"
    );
}

#[test]
fn test_nesting_too_deep_message() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 256 }, Position(256));

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(
        error.to_string(),
        "expression nested more than 256 levels deep"
    );
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_render_error_after_multibyte_text() {
    // `é` is two bytes, so `;` sits at byte 5 but column 4
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::Semicolon,
        },
        Position(5),
    );

    let rendered = render_error(&error, "é + ;", "repl");

    assert_eq!(
        rendered.lines().skip(3).collect::<Vec<_>>(),
        vec!["1 | é + ;", "  | ----^"]
    );
}
