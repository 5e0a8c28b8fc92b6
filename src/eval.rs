//! Recursive evaluation of a finished scope tree.

use crate::error::CalcError;
use crate::parser::tokens::BinOp;
use crate::parser::tree::{NodeKey, Payload, Scope};

/// Reduce the subtree under `root` to a number.
pub(crate) fn reduce(scope: &Scope, root: NodeKey, max_depth: usize) -> Result<f64, CalcError> {
    eval_node(scope, root, 0, max_depth)
}

fn eval_node(
    scope: &Scope,
    key: NodeKey,
    depth: usize,
    max_depth: usize,
) -> Result<f64, CalcError> {
    if depth > max_depth {
        return Err(CalcError::NestingTooDeep { limit: max_depth });
    }
    let node = &scope.arena[key];
    match &node.payload {
        Payload::Number(value) => Ok(*value),
        // rendered groups only appear in render mode
        Payload::Group(_) => Err(CalcError::IncompleteExpression),
        Payload::Op(op) => {
            let left = node.left.ok_or(CalcError::IncompleteExpression)?;
            let right = node.right.ok_or(CalcError::IncompleteExpression)?;
            let l = eval_node(scope, left, depth + 1, max_depth)?;
            let r = eval_node(scope, right, depth + 1, max_depth)?;
            Ok(apply(*op, l, r))
        }
    }
}

/// Division and modulo follow IEEE-754 semantics: a zero divisor yields an
/// infinite or NaN result, not an error.
fn apply(op: BinOp, l: f64, r: f64) -> f64 {
    match op {
        BinOp::Add => l + r,
        BinOp::Sub => l - r,
        BinOp::Mul => l * r,
        BinOp::Div => l / r,
        BinOp::Rem => l % r,
        BinOp::Pow => l.powf(r),
    }
}
