//! treecalc parses plain integer arithmetic (`+ - * /`, parentheses, unary
//! minus) into an expression tree, evaluates the tree to an `f64`, and tears
//! the tree down explicitly.
//!
//! ```
//! use treecalc::eval_str;
//!
//! assert_eq!(eval_str("(1 + 2) * 3").unwrap(), 9.0);
//! assert!(eval_str("10 / 0").is_err());
//! ```

/// The expression tree: node types, construction, rendering, and the owner
/// handle with explicit teardown.
pub mod ast;
/// Typed errors for the parse and evaluation phases.
pub mod error;
/// Postorder evaluation of a parsed tree.
pub mod eval;
/// Tokenless recursive-descent parsing.
pub mod parser;

pub use ast::{BinaryOperator, ExprTree, Node};
pub use error::{Error, ParseError, RuntimeError};
pub use eval::evaluate;
pub use parser::parse;

/// Parses, evaluates, and frees an expression in one call.
///
/// # Errors
/// A parse error for malformed input, or a runtime error when the expression
/// divides by zero.
pub fn eval_str(input: &str) -> Result<f64, Error> {
    let mut tree = parse(input)?;
    let value = evaluate(&tree)?;
    tree.free()?;
    Ok(value)
}
