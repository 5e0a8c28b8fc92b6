//! Parser module - converts strings to results
//!
//! Pipeline: lex -> insert tokens into the tree builder -> reduce the
//! finished tree (numerically or as typeset text).

mod lexer;
pub(crate) mod tokens;
pub(crate) mod tree;

use crate::config::InputFormat;
use crate::error::CalcError;
use tree::{Mode, Reduced, TreeBuilder};

/// Evaluate `input` to a number.
pub(crate) fn evaluate_str(
    input: &str,
    format: InputFormat,
    max_depth: usize,
) -> Result<f64, CalcError> {
    match run(input, format, Mode::Evaluate, max_depth)? {
        Reduced::Number(value) => Ok(value),
        // evaluate mode never folds to text
        Reduced::Rendered(_) => Err(CalcError::IncompleteExpression),
    }
}

/// Render `input` as LaTeX.
pub(crate) fn render_str(
    input: &str,
    format: InputFormat,
    max_depth: usize,
) -> Result<String, CalcError> {
    match run(input, format, Mode::Render, max_depth)? {
        Reduced::Rendered(text) => Ok(text),
        Reduced::Number(_) => Err(CalcError::IncompleteExpression),
    }
}

fn run(
    input: &str,
    format: InputFormat,
    mode: Mode,
    max_depth: usize,
) -> Result<Reduced, CalcError> {
    // Step 1: lex (literals are decoded here)
    let tokens = lexer::lex(input, format)?;
    if tokens.is_empty() {
        return Err(CalcError::EmptyExpression);
    }

    // Step 2: build the expression tree one token at a time
    let mut builder = TreeBuilder::new(mode, max_depth);
    for token in tokens {
        builder.insert(token)?;
    }

    // Step 3: reduce the root scope
    builder.finish()
}
