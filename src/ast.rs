use std::fmt;

use crate::error::RuntimeError;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        };
        write!(f, "{symbol}")
    }
}

/// A node of the expression tree: an integer literal, or a binary operation
/// that exclusively owns both of its operands.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Number(i64),
    BinaryOp {
        op: BinaryOperator,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn number(value: i64) -> Self {
        Self::Number(value)
    }

    /// Takes ownership of both children and boxes them under a new node.
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::BinaryOp { op, left, right } => write!(f, "({op} {left} {right})"),
        }
    }
}

/// Owner handle for a parsed expression tree.
///
/// The parser hands out exactly one handle per successful parse. Evaluation
/// borrows the tree read-only; [`free`](Self::free) releases every node and
/// leaves the handle empty, after which both evaluation and a second `free`
/// report [`RuntimeError::NullTree`].
#[derive(Debug)]
pub struct ExprTree {
    root: Option<Box<Node>>,
}

impl ExprTree {
    pub(crate) fn new(root: Node) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Releases every node of the tree exactly once.
    ///
    /// # Errors
    /// `NullTree` if the tree was already freed.
    pub fn free(&mut self) -> Result<(), RuntimeError> {
        match self.root.take() {
            Some(root) => {
                release(root);
                Ok(())
            }
            None => Err(RuntimeError::NullTree),
        }
    }
}

// Teardown runs over an explicit worklist instead of recursing, so stack
// usage stays flat no matter how deep the tree is.
fn release(root: Box<Node>) {
    let mut pending = vec![root];
    while let Some(node) = pending.pop() {
        match *node {
            Node::Number(_) => {}
            Node::BinaryOp { left, right, .. } => {
                pending.push(left);
                pending.push(right);
            }
        }
    }
}

impl Drop for ExprTree {
    fn drop(&mut self) {
        if let Some(root) = self.root.take() {
            release(root);
        }
    }
}

impl fmt::Display for ExprTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(root) => write!(f, "{root}"),
            None => write!(f, "<freed>"),
        }
    }
}
