//! Typeset (LaTeX) rendering of a finished scope tree.
//!
//! Mirrors the evaluator's recursion but reduces to display text: division
//! becomes a stacked fraction (falling back to an inline `\div` when an
//! operand already carries brackets), modulo wraps in explicit parentheses,
//! multiplication uses a centered dot, and the remaining operators render
//! as plain infix.

use crate::error::CalcError;
use crate::parser::tokens::BinOp;
use crate::parser::tree::{NodeKey, Payload, Scope};

/// Reduce the subtree under `root` to a LaTeX string.
pub(crate) fn reduce(scope: &Scope, root: NodeKey, max_depth: usize) -> Result<String, CalcError> {
    render_node(scope, root, 0, max_depth)
}

fn render_node(
    scope: &Scope,
    key: NodeKey,
    depth: usize,
    max_depth: usize,
) -> Result<String, CalcError> {
    if depth > max_depth {
        return Err(CalcError::NestingTooDeep { limit: max_depth });
    }
    let node = &scope.arena[key];
    match &node.payload {
        Payload::Number(value) => Ok(format_number(*value)),
        Payload::Group(text) => Ok(text.clone()),
        Payload::Op(op) => {
            let left = node.left.ok_or(CalcError::IncompleteExpression)?;
            let right = node.right.ok_or(CalcError::IncompleteExpression)?;
            let l = render_node(scope, left, depth + 1, max_depth)?;
            let r = render_node(scope, right, depth + 1, max_depth)?;
            Ok(typeset(*op, &l, &r))
        }
    }
}

fn typeset(op: BinOp, l: &str, r: &str) -> String {
    match op {
        // stacked fraction unless an operand already carries brackets
        BinOp::Div => {
            if l.ends_with(')') || r.starts_with('(') {
                format!("{}\\div {}", l, r)
            } else {
                format!("\\frac{{{}}}{{{}}}", l, r)
            }
        }
        BinOp::Rem => format!("({}\\mod {})", l, r),
        BinOp::Mul => format!("{}\\cdot {}", l, r),
        BinOp::Add => format!("{}+{}", l, r),
        BinOp::Sub => format!("{}-{}", l, r),
        BinOp::Pow => format!("{}^{}", l, r),
    }
}

/// Integer-valued numbers print without a fractional part.
fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value.fract() == 0.0 && value.abs() < 1e10 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
