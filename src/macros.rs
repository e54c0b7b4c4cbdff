//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! It keeps the token construction sites in the lexer to a single line.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's literal text
/// * `$start` - Byte offset of the first character
/// * `$end` - Byte offset one past the last character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntegerLiteral, "42".to_string(), 0, 2);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $start:expr, $end:expr) => {
        Token {
            kind: $kind,
            literal: $literal,
            span: $crate::Span::new($start, $end),
        }
    };
}
