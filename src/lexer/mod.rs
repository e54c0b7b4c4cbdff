//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - On-demand scanning with one character of lookahead
//! - Recognition of the localized keywords, identifiers and integer literals
//! - One- and two-character operators (`=`/`==`, `!`/`!=`, `<`/`<=`, `>`/`>=`)
//! - Byte spans on every token for error reporting
//!
//! Unrecognised characters never fail the scan; they come out as `Illegal` tokens and the
//! parser reports them.

pub mod lexer;
pub mod tokens;
