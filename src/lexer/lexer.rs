use crate::MK_TOKEN;

use super::tokens::{lookup_identifier, Token, TokenKind};

/// On-demand scanner over a source buffer.
///
/// `ch` is the byte under `pos`, or `None` once the buffer is exhausted. `read_pos` always
/// points at the byte after `ch`, which gives one character of lookahead through
/// `peek_char`.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    read_pos: usize,
    ch: Option<u8>,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        let mut lexer = Lexer {
            source: source.into(),
            pos: 0,
            read_pos: 0,
            ch: None,
        };
        lexer.read_char();

        lexer
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    fn read_char(&mut self) {
        self.ch = self.source.as_bytes().get(self.read_pos).copied();
        self.pos = self.read_pos;
        if self.read_pos < self.source.len() {
            self.read_pos += 1;
        }
    }

    fn peek_char(&self) -> Option<u8> {
        self.source.as_bytes().get(self.read_pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.read_char();
        }
    }

    /// Advances while `pred` holds and returns the consumed run.
    fn read_while(&mut self, pred: fn(u8) -> bool) -> (usize, usize) {
        let start = self.pos;
        while self.ch.is_some_and(pred) {
            self.read_char();
        }

        (start, self.pos)
    }

    /// Emits `double` when the next character is `=`, otherwise `single`.
    fn with_equals(&mut self, single: TokenKind, double: TokenKind) -> Token {
        let start = self.pos;
        if self.peek_char() == Some(b'=') {
            self.read_char();
            self.read_char();
            MK_TOKEN!(double, self.source[start..self.pos].to_string(), start, self.pos)
        } else {
            self.read_char();
            MK_TOKEN!(single, self.source[start..self.pos].to_string(), start, self.pos)
        }
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        let start = self.pos;
        self.read_char();
        MK_TOKEN!(kind, self.source[start..self.pos].to_string(), start, self.pos)
    }

    /// Consumes one whole character (possibly multi-byte) as an `Illegal` token.
    fn illegal(&mut self) -> Token {
        let start = self.pos;
        let width = self.source[start..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);

        for _ in 0..width {
            self.read_char();
        }

        MK_TOKEN!(
            TokenKind::Illegal,
            self.source[start..self.pos].to_string(),
            start,
            self.pos
        )
    }

    /// Scans the next token. Keeps returning `EndOfInput` once the source is exhausted.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(ch) = self.ch else {
            return MK_TOKEN!(TokenKind::EndOfInput, String::new(), self.pos, self.pos);
        };

        match ch {
            b'=' => self.with_equals(TokenKind::Assign, TokenKind::Equal),
            b'!' => self.with_equals(TokenKind::Bang, TokenKind::NotEqual),
            b'<' => self.with_equals(TokenKind::LessThan, TokenKind::LessOrEqual),
            b'>' => self.with_equals(TokenKind::GreaterThan, TokenKind::GreaterOrEqual),
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Minus),
            b'*' => self.single(TokenKind::Asterisk),
            b'/' => self.single(TokenKind::Slash),
            b',' => self.single(TokenKind::Comma),
            b';' => self.single(TokenKind::Semicolon),
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),
            c if is_letter(c) => {
                let (start, end) = self.read_while(is_letter);
                let literal = &self.source[start..end];
                MK_TOKEN!(lookup_identifier(literal), literal.to_string(), start, end)
            }
            c if c.is_ascii_digit() => {
                let (start, end) = self.read_while(|c| c.is_ascii_digit());
                MK_TOKEN!(
                    TokenKind::IntegerLiteral,
                    self.source[start..end].to_string(),
                    start,
                    end
                )
            }
            _ => self.illegal(),
        }
    }
}

fn is_letter(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

/// Yields every token up to, but not including, `EndOfInput`.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.kind == TokenKind::EndOfInput {
            None
        } else {
            Some(token)
        }
    }
}

/// Scans the whole source. The returned vector always ends with a single `EndOfInput` token.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EndOfInput;
        tokens.push(token);
        if done {
            break;
        }
    }

    tracing::trace!(token_count = tokens.len(), "tokenized source");
    tokens
}
