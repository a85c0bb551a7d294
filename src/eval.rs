use crate::{
    ast::{BinaryOperator, ExprTree, Node},
    error::RuntimeError,
};

/// Evaluates a parsed tree to a floating-point result.
///
/// The walk is postorder: both operands are computed before their operator is
/// applied. Division checks the computed value of the right-hand side, so any
/// divisor that works out to zero is rejected, not just a literal `0`.
///
/// # Errors
/// `DivisionByZero` for a zero divisor, `NullTree` for a freed handle.
pub fn evaluate(tree: &ExprTree) -> Result<f64, RuntimeError> {
    let root = tree.root().ok_or(RuntimeError::NullTree)?;
    eval_node(root)
}

fn eval_node(node: &Node) -> Result<f64, RuntimeError> {
    match node {
        Node::Number(value) => Ok(*value as f64),
        Node::BinaryOp { op, left, right } => {
            let lhs = eval_node(left)?;
            let rhs = eval_node(right)?;
            match op {
                BinaryOperator::Add => Ok(lhs + rhs),
                BinaryOperator::Sub => Ok(lhs - rhs),
                BinaryOperator::Mul => Ok(lhs * rhs),
                BinaryOperator::Div => {
                    if rhs == 0.0 {
                        return Err(RuntimeError::DivisionByZero);
                    }
                    Ok(lhs / rhs)
                }
            }
        }
    }
}
