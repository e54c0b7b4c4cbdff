use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(stmt_fn) = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        return stmt_fn(parser);
    }

    let expression = parse_expr(parser, BindingPower::Default)?;
    skip_semicolon(parser);

    Ok(Stmt::Expression(ExpressionStmt {
        span: expression.get_span().to(&parser.current_token().span),
        expression,
    }))
}

/// The statement terminator is optional; consume it when present.
fn skip_semicolon(parser: &mut Parser) {
    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.current_token().span;

    let name_token = parser.expect_peek(TokenKind::Identifier)?;
    let name = Identifier {
        name: name_token.literal,
        span: name_token.span,
    };

    parser.expect_peek(TokenKind::Assign)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;
    skip_semicolon(parser);

    Ok(Stmt::Let(LetStmt {
        span: start.to(&parser.current_token().span),
        name,
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.current_token().span;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;
    skip_semicolon(parser);

    Ok(Stmt::Return(ReturnStmt {
        span: start.to(&parser.current_token().span),
        value,
    }))
}

/// Parses `{ ... }` with the opening brace current. Leaves the closing brace current.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.current_token().span;
    parser.enter_block();
    parser.advance();

    let mut statements = Vec::new();
    while parser.current_token_kind() != TokenKind::RBrace {
        if parser.current_token_kind() == TokenKind::EndOfInput {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: TokenKind::RBrace,
                    found: TokenKind::EndOfInput,
                },
                parser.get_position(),
            ));
        }

        statements.push(parse_stmt(parser)?);
        parser.advance();
    }

    parser.leave_block();

    Ok(BlockStmt {
        statements,
        span: start.to(&parser.current_token().span),
    })
}
