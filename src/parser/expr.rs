use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BooleanLiteral, CallExpr, FunctionLiteral, Identifier, IfExpr, InfixExpr,
            IntegerLiteral, PrefixExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.enter_expr()?;
    let expr = parse_nud_then_led(parser, bp);
    parser.leave_expr();

    expr
}

fn parse_nud_then_led(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(Error::new(
            ErrorImpl::NoPrefixParseFn { kind: token_kind },
            parser.get_position(),
        ));
    };

    let mut left = nud_fn(parser)?;

    // While the operator ahead binds tighter than `bp`, fold it into the lhs
    while parser.peek_binding_power() > bp {
        let operator_bp = parser.peek_binding_power();
        let Some(led_fn) = parser.get_led_lookup().get(&parser.peek_token_kind()).copied() else {
            break;
        };

        parser.advance();
        left = led_fn(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token();

    match token.kind {
        TokenKind::IntegerLiteral => match token.literal.parse::<i64>() {
            Ok(value) => Ok(Expr::Integer(IntegerLiteral {
                value,
                span: token.span,
            })),
            Err(_) => Err(Error::new(
                ErrorImpl::IntegerParse {
                    literal: token.literal.clone(),
                },
                token.span.start,
            )),
        },
        TokenKind::Identifier => Ok(Expr::Identifier(Identifier {
            name: token.literal.clone(),
            span: token.span,
        })),
        TokenKind::True | TokenKind::False => Ok(Expr::Boolean(BooleanLiteral {
            value: token.kind == TokenKind::True,
            span: token.span,
        })),
        kind => Err(Error::new(
            ErrorImpl::NoPrefixParseFn { kind },
            token.span.start,
        )),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Prefix(PrefixExpr {
        span: operator_token.span.to(operand.get_span()),
        operator: operator_token.literal,
        operand: Box::new(operand),
    }))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator = parser.current_token().literal.clone();
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        span: left.get_span().to(right.get_span()),
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::RParen)?;

    Ok(expr)
}

/// `agar (<condition>) { ... }` with an optional `warna { ... }`.
pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.current_token().span;

    parser.expect_peek(TokenKind::LParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::RParen)?;

    parser.expect_peek(TokenKind::LBrace)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_token_kind() == TokenKind::Else {
        parser.advance();
        parser.expect_peek(TokenKind::LBrace)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    let end = alternative.as_ref().unwrap_or(&consequence).span;

    Ok(Expr::If(IfExpr {
        condition: Box::new(condition),
        consequence,
        alternative,
        span: start.to(&end),
    }))
}

/// `kaam(<params>) { ... }`
pub fn parse_function_literal(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.current_token().span;

    parser.expect_peek(TokenKind::LParen)?;
    let parameters = parse_function_parameters(parser)?;

    parser.expect_peek(TokenKind::LBrace)?;
    let body = parse_block_stmt(parser)?;

    Ok(Expr::Function(FunctionLiteral {
        span: start.to(&body.span),
        parameters,
        body,
    }))
}

/// Parses `a, b, c)` with the opening `(` current. Leaves the closing `)` current.
fn parse_function_parameters(parser: &mut Parser) -> Result<Vec<Identifier>, Error> {
    let mut parameters = vec![];

    if parser.peek_token_kind() == TokenKind::RParen {
        parser.advance();
        return Ok(parameters);
    }

    loop {
        let token = parser.expect_peek(TokenKind::Identifier)?;
        parameters.push(Identifier {
            name: token.literal,
            span: token.span,
        });

        if parser.peek_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance();
    }

    parser.expect_peek(TokenKind::RParen)?;

    Ok(parameters)
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let mut arguments = vec![];

    if parser.peek_token_kind() == TokenKind::RParen {
        parser.advance();
    } else {
        loop {
            parser.advance();
            arguments.push(parse_expr(parser, BindingPower::Default)?);

            if parser.peek_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }

        parser.expect_peek(TokenKind::RParen)?;
    }

    Ok(Expr::Call(CallExpr {
        span: left.get_span().to(&parser.current_token().span),
        function: Box::new(left),
        arguments,
    }))
}
