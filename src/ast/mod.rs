/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Stmt` / `Expr` sum types and the `Program` root
/// - expressions: Definitions for the expression nodes
/// - statements: Definitions for the statement nodes
///
/// Every node renders back to source-like text through `Display`, with every prefix and
/// infix operation fully parenthesized.
pub mod ast;
pub mod expressions;
pub mod statements;
