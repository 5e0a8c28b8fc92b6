//! Infix expression calculator core
//!
//! Parses and evaluates infix arithmetic with parentheses, unary minus,
//! multi-base literals (`ffh`, `0x2a`, `1010b`, `17o`), and optional
//! IEEE-754 bit-pattern input, or renders the same parse as LaTeX.
//!
//! # Features
//! - Single-pass tokenizer and precedence-climbing tree builder
//! - Implicit multiplication (`2(3+4)`, `(1+2)(3+4)`)
//! - Literal bases selected by suffix (`h`, `b`, `o`) or `0x` prefix
//! - Bit-exact binary32/binary64 decoding of full-width hex/binary literals
//! - LaTeX rendering of the same parse (`\frac`, `\cdot`, `\mod`)
//! - Output formatting helpers (binary/hex/custom radix, raw bit patterns)
//!
//! # Usage
//! ```
//! use bitcalc::{evaluate, render, InputFormat};
//!
//! assert_eq!(evaluate("2+3*4", InputFormat::Normal).unwrap(), 14.0);
//! assert_eq!(evaluate("ffh-0xf0", InputFormat::Normal).unwrap(), 15.0);
//! assert_eq!(render("1/2").unwrap(), "\\frac{1}{2}");
//!
//! // 40490FDBh is the binary32 bit pattern for pi
//! let pi = evaluate("40490FDBh", InputFormat::Ieee754_32).unwrap();
//! assert!((pi - std::f64::consts::PI).abs() < 1e-6);
//! ```
//!
//! Division and modulo follow IEEE-754 semantics (`1/0` is infinity, not an
//! error); every other malformed input surfaces as a [`CalcError`] rather
//! than a panic or a silent `NaN`.
//!
//! # Note
//! For per-call control over the input format and the nesting limit, use the
//! [`Calc`] builder.

mod builder;
mod config;
mod error;
mod eval;
mod format;
mod ieee754;
mod literal;
mod parser;
mod render;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use builder::Calc;
pub use config::InputFormat;
pub use error::CalcError;
pub use format::{to_binary, to_hex, to_radix, OutputFormat};

/// Default limit on bracket nesting and reduction recursion depth
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Evaluate an infix expression to a number.
///
/// # Arguments
/// * `input` - Expression text (e.g., `"2(3+4)^2"`); whitespace is ignored
/// * `format` - How full-width hex/binary literals are decoded
///
/// # Returns
/// The numeric value, or a [`CalcError`] describing why the input was
/// rejected.
///
/// # Example
/// ```
/// use bitcalc::{evaluate, InputFormat};
///
/// assert_eq!(evaluate("(2+3)*4", InputFormat::Normal).unwrap(), 20.0);
/// ```
pub fn evaluate(input: &str, format: InputFormat) -> Result<f64, CalcError> {
    Calc::new().input_format(format).evaluate(input)
}

/// Render an infix expression as a LaTeX string.
///
/// Runs the same pipeline as [`evaluate`] but reduces the parse to typeset
/// text instead of a number. Literals are decoded in
/// [`InputFormat::Normal`]; use [`Calc`] to render with another format.
///
/// # Example
/// ```
/// use bitcalc::render;
///
/// assert_eq!(render("7%4").unwrap(), "(7\\mod 4)");
/// ```
pub fn render(input: &str) -> Result<String, CalcError> {
    Calc::new().render(input)
}
