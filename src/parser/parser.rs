//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. The parser pulls tokens from its
//! [`Lexer`] one at a time and keeps exactly two of them: the current token and the peek
//! token. Expression parsing is a Pratt parser driven by the lookup tables below:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix positions
//! - LED (left denotation) handlers for infix positions
//! - Binding powers for operator precedence
//!
//! Handlers return `Result`; the first error inside a statement aborts that statement only.
//! [`Parser::parse_program`] records the error, skips to the next statement boundary and
//! carries on.

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens, consumed lazily
    lexer: Lexer,
    /// The token being examined
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Errors recorded so far, in source order
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Blocks entered but not yet closed by the statement being parsed
    open_blocks: usize,
    /// Expressions entered but not yet finished by the statement being parsed
    expr_depth: usize,
}

/// Deepest expression nesting accepted before the statement is abandoned.
pub const MAX_EXPR_DEPTH: usize = 256;

impl Parser {
    /// Creates a new Parser and primes the current and peek tokens.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            open_blocks: 0,
            expr_depth: 0,
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Shifts the peek token into the current slot and pulls a new peek token.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Advances if the peek token is of the expected kind.
    ///
    /// # Returns
    ///
    /// The new current token, or an `UnexpectedToken` error positioned at the peek token.
    /// The parser does not move on error.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.peek.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: self.peek.kind,
                },
                self.peek.span.start,
            ));
        }

        self.advance();
        Ok(self.current.clone())
    }

    /// Binding power of the peek token in infix position.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.peek.kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub(crate) fn enter_block(&mut self) {
        self.open_blocks += 1;
    }

    pub(crate) fn leave_block(&mut self) {
        self.open_blocks = self.open_blocks.saturating_sub(1);
    }

    /// Fails with `NestingTooDeep` once `MAX_EXPR_DEPTH` expressions are open.
    pub(crate) fn enter_expr(&mut self) -> Result<(), Error> {
        if self.expr_depth >= MAX_EXPR_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_EXPR_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.expr_depth += 1;
        Ok(())
    }

    pub(crate) fn leave_expr(&mut self) {
        self.expr_depth = self.expr_depth.saturating_sub(1);
    }

    /// Position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    fn record_error(&mut self, error: Error) {
        tracing::debug!(
            position = error.get_position().0,
            kind = error.get_error_name(),
            "{}",
            error
        );
        self.errors.push(error);
    }

    /// Skips the remains of a failed statement.
    ///
    /// Stops on a `;` outside any brace group, on the `}` closing the outermost group that
    /// was open (plus a `;` right after it), or at end of input. The stopping token is left
    /// current.
    fn synchronize(&mut self) {
        let mut depth = std::mem::take(&mut self.open_blocks);

        loop {
            match self.current.kind {
                TokenKind::EndOfInput => break,
                TokenKind::Semicolon if depth == 0 => break,
                TokenKind::RBrace if depth <= 1 => {
                    if self.peek.kind == TokenKind::Semicolon {
                        self.advance();
                    }
                    break;
                }
                TokenKind::RBrace => depth -= 1,
                TokenKind::LBrace => depth += 1,
                _ => {}
            }
            self.advance();
        }

        tracing::trace!(
            position = self.current.span.start.0,
            "resumed after failed statement"
        );
    }

    /// Parses statements until end of input.
    ///
    /// Always returns a program. Statements that fail to parse are left out of it and their
    /// errors are available through [`Parser::errors`].
    #[tracing::instrument(skip_all, fields(source_len = self.lexer.source().len()))]
    pub fn parse_program(&mut self) -> Program {
        let mut statements = vec![];

        while self.current.kind != TokenKind::EndOfInput {
            self.open_blocks = 0;
            self.expr_depth = 0;

            match parse_stmt(self) {
                Ok(stmt) => statements.push(stmt),
                Err(error) => {
                    self.record_error(error);
                    self.synchronize();
                }
            }

            self.advance();
        }

        Program { statements }
    }
}

/// Parses source text into a program.
///
/// This is the main entry point for parsing. It wires a lexer to a fresh parser and
/// parses every statement.
///
/// # Returns
///
/// A tuple containing:
/// - The program (only the cleanly parsed statements)
/// - The errors recorded along the way, empty on success
pub fn parse(source: &str) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (program, parser.errors)
}
