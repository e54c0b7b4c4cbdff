use std::fmt::{self, Display};

use crate::{lexer::tokens::TokenKind, Span};

use super::{ast::Expr, statements::BlockStmt};

// LITERALS

/// Identifier
/// A name, either used as a value or bound by `maanlo` / a function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Integer Literal
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub value: i64,
    pub span: Span,
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Boolean Literal
/// `sahih` or `ghalat`.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteral {
    pub value: bool,
    pub span: Span,
}

impl Display for BooleanLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.value {
            TokenKind::True
        } else {
            TokenKind::False
        };
        write!(f, "{}", kind.spelling().unwrap_or_default())
    }
}

// COMPLEX

/// Prefix Expression
/// Represents a prefix operation (`!x`, `-x`) on an expression in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: String,
    pub operand: Box<Expr>,
    pub span: Span,
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.operator, self.operand)
    }
}

/// Infix Expression
/// Represents a binary operation between two expressions in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
    pub span: Span,
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

/// If Expression
/// `agar (condition) { ... } warna { ... }`, where the `warna` branch is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub condition: Box<Expr>,
    pub consequence: BlockStmt,
    pub alternative: Option<BlockStmt>,
    pub span: Span,
}

impl Display for IfExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            TokenKind::If.spelling().unwrap_or_default(),
            self.condition,
            self.consequence
        )?;

        if let Some(alternative) = &self.alternative {
            write!(
                f,
                " {} {}",
                TokenKind::Else.spelling().unwrap_or_default(),
                alternative
            )?;
        }

        Ok(())
    }
}

/// Function Literal
/// `kaam(a, b) { ... }`. Functions are values; naming one goes through `maanlo`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    pub parameters: Vec<Identifier>,
    pub body: BlockStmt,
    pub span: Span,
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parameters = self
            .parameters
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>();

        write!(
            f,
            "{}({}) {}",
            TokenKind::Function.spelling().unwrap_or_default(),
            parameters.join(", "),
            self.body
        )
    }
}

/// Call Expression
/// Applies `function` (any expression) to a list of arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub function: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arguments = self
            .arguments
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>();

        write!(f, "{}({})", self.function, arguments.join(", "))
    }
}
