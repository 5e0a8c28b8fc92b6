//! Numeric-literal decoding.
//!
//! A literal is a run of digits, letters, and at most one decimal point.
//! The base is selected by an `h`, `b`, or `o` suffix or a `0x` prefix;
//! bare literals are decimal. Under an IEEE-754 input format, hex/binary
//! literals whose digit count exactly matches the full bit pattern width
//! are reinterpreted as raw binary32/binary64 patterns instead of integers.

use crate::config::InputFormat;
use crate::error::CalcError;
use crate::ieee754;

/// Decode one literal token to a number.
///
/// Any failure (bad digits for the claimed base, empty digit body,
/// out-of-range value) is an [`CalcError::InvalidLiteral`]; a literal is
/// never silently coerced to zero or `NaN`.
pub(crate) fn decode(text: &str, format: InputFormat) -> Result<f64, CalcError> {
    if text.is_empty() {
        return Err(CalcError::invalid_literal(text));
    }
    if text.contains('.') {
        decode_float(text)
    } else {
        decode_integer(text, format)
    }
}

/// Literals carrying a decimal point.
///
/// Based floats drop the fractional part: only the integer part is
/// decoded in the suffix-implied base.
fn decode_float(text: &str) -> Result<f64, CalcError> {
    if let Some(body) = strip_hex_marker(text) {
        parse_radix(text, integer_part(body), 16)
    } else if let Some(body) = text.strip_suffix('b') {
        parse_radix(text, integer_part(body), 2)
    } else if let Some(body) = text.strip_suffix('o') {
        parse_radix(text, integer_part(body), 8)
    } else {
        text.parse::<f64>()
            .map_err(|_| CalcError::invalid_literal(text))
    }
}

/// Literals without a decimal point: plain integers, except that under an
/// IEEE-754 input format a full-width hex/binary digit string decodes as a
/// bit pattern.
fn decode_integer(text: &str, format: InputFormat) -> Result<f64, CalcError> {
    if let Some(body) = strip_hex_marker(text) {
        match format {
            InputFormat::Ieee754_32 if body.len() == 8 => ieee754::decode_hex32(body),
            InputFormat::Ieee754_64 if body.len() == 16 => ieee754::decode_hex64(body),
            _ => parse_radix(text, body, 16),
        }
    } else if let Some(body) = text.strip_suffix('b') {
        match format {
            InputFormat::Ieee754_32 if body.len() == 32 => ieee754::decode_bin32(body),
            InputFormat::Ieee754_64 if body.len() == 64 => ieee754::decode_bin64(body),
            _ => parse_radix(text, body, 2),
        }
    } else if let Some(body) = text.strip_suffix('o') {
        parse_radix(text, body, 8)
    } else {
        parse_radix(text, text, 10)
    }
}

/// An `h` suffix or a `0x` prefix both mark hexadecimal.
fn strip_hex_marker(text: &str) -> Option<&str> {
    text.strip_suffix('h').or_else(|| text.strip_prefix("0x"))
}

fn integer_part(body: &str) -> &str {
    match body.find('.') {
        Some(dot) => &body[..dot],
        None => body,
    }
}

fn parse_radix(text: &str, body: &str, radix: u32) -> Result<f64, CalcError> {
    u64::from_str_radix(body, radix)
        .map(|value| value as f64)
        .map_err(|_| CalcError::invalid_literal(text))
}
