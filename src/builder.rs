//! Builder pattern API for configuring evaluation and rendering.
//!
//! # Example
//! ```
//! use bitcalc::{Calc, InputFormat};
//!
//! let value = Calc::new()
//!     .input_format(InputFormat::Ieee754_32)
//!     .evaluate("40490FDBh")
//!     .unwrap();
//! assert!((value - std::f64::consts::PI).abs() < 1e-6);
//! ```

use crate::DEFAULT_MAX_DEPTH;
use crate::config::InputFormat;
use crate::error::CalcError;
use crate::parser;

/// Fluent configuration for the expression pipeline
#[derive(Clone, Debug, Default)]
pub struct Calc {
    input_format: InputFormat,
    max_depth: Option<usize>,
}

impl Calc {
    /// Create a new builder with default settings (`Normal` input format,
    /// [`DEFAULT_MAX_DEPTH`] nesting limit)
    pub fn new() -> Self {
        Self::default()
    }

    /// Select how full-width hex/binary literals are decoded
    pub fn input_format(mut self, format: InputFormat) -> Self {
        self.input_format = format;
        self
    }

    /// Override the bracket-nesting and reduction recursion limit
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Evaluate an infix expression to a number
    pub fn evaluate(&self, input: &str) -> Result<f64, CalcError> {
        parser::evaluate_str(input, self.input_format, self.depth_limit())
    }

    /// Render an infix expression as a LaTeX string
    pub fn render(&self, input: &str) -> Result<String, CalcError> {
        parser::render_str(input, self.input_format, self.depth_limit())
    }

    fn depth_limit(&self) -> usize {
        self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH)
    }
}
