use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

/// Reserved words and the kinds they resolve to.
pub const KEYWORDS: [(&str, TokenKind); 7] = [
    ("maanlo", TokenKind::Let),
    ("kaam", TokenKind::Function),
    ("sahih", TokenKind::True),
    ("ghalat", TokenKind::False),
    ("agar", TokenKind::If),
    ("warna", TokenKind::Else),
    ("wapis", TokenKind::Return),
];

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> =
        KEYWORDS.iter().copied().collect();
}

/// Resolves an identifier-shaped run to its keyword kind, or `Identifier`.
pub fn lookup_identifier(ident: &str) -> TokenKind {
    RESERVED_LOOKUP
        .get(ident)
        .copied()
        .unwrap_or(TokenKind::Identifier)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EndOfInput,
    Illegal,

    Identifier,
    IntegerLiteral,

    Assign, // =
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,

    LessThan,
    GreaterThan,
    LessOrEqual,
    GreaterOrEqual,
    Equal,    // ==
    NotEqual, // !=

    Comma,
    Semicolon,

    LParen,
    RParen,
    LBrace,
    RBrace,

    // Reserved
    Let,
    Function,
    True,
    False,
    If,
    Else,
    Return,
}

impl TokenKind {
    /// The fixed source spelling of the kind, if it has one.
    ///
    /// Identifiers, integers, illegal characters and end of input carry their text in the
    /// token literal instead.
    pub fn spelling(&self) -> Option<&'static str> {
        let spelling = match self {
            TokenKind::EndOfInput
            | TokenKind::Illegal
            | TokenKind::Identifier
            | TokenKind::IntegerLiteral => return None,
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::LessThan => "<",
            TokenKind::GreaterThan => ">",
            TokenKind::LessOrEqual => "<=",
            TokenKind::GreaterOrEqual => ">=",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Let => "maanlo",
            TokenKind::Function => "kaam",
            TokenKind::True => "sahih",
            TokenKind::False => "ghalat",
            TokenKind::If => "agar",
            TokenKind::Else => "warna",
            TokenKind::Return => "wapis",
        };

        Some(spelling)
    }

    pub fn is_keyword(&self) -> bool {
        KEYWORDS.iter().any(|(_, kind)| kind == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::EndOfInput => write!(f, "EOF"),
            TokenKind::Illegal => write!(f, "ILLEGAL"),
            TokenKind::Identifier => write!(f, "IDENT"),
            TokenKind::IntegerLiteral => write!(f, "INT"),
            kind if kind.is_keyword() => {
                write!(f, "{}", kind.spelling().unwrap_or_default().to_uppercase())
            }
            kind => write!(f, "{}", kind.spelling().unwrap_or_default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    /// One-line summary used by token dumps: `KIND (literal)` for tokens whose text varies.
    pub fn describe(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::Identifier,
            TokenKind::IntegerLiteral,
            TokenKind::Illegal,
        ]) {
            format!("{} ({})", self.kind, self.literal)
        } else {
            format!("{} ()", self.kind)
        }
    }
}
