//! Output formatting of evaluated results.
//!
//! Stateless helpers layered on the numeric result: binary, hex, or
//! custom-radix text, optionally as raw IEEE-754 bit patterns. The
//! `Normal` paths truncate the value into an unsigned 32-bit integer
//! before printing digits.

use crate::error::CalcError;
use crate::ieee754;

const RADIX_DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Selects how [`to_binary`] and [`to_hex`] present the value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// 32-bit truncated integer digits
    #[default]
    Normal,
    /// Raw binary32 bit pattern of the value
    Ieee754_32,
    /// Raw binary64 bit pattern of the value
    Ieee754_64,
}

/// Binary text with the calculator's `b` suffix.
///
/// # Example
/// ```
/// use bitcalc::{to_binary, OutputFormat};
///
/// assert_eq!(to_binary(10.0, OutputFormat::Normal), "1010b");
/// ```
pub fn to_binary(value: f64, format: OutputFormat) -> String {
    match format {
        OutputFormat::Normal => format!("{:b}b", truncate_u32(value)),
        OutputFormat::Ieee754_32 => format!("{:032b}b", ieee754::encode_bits32(value)),
        OutputFormat::Ieee754_64 => format!("{:064b}b", ieee754::encode_bits64(value)),
    }
}

/// Hexadecimal text with a `0x` prefix.
pub fn to_hex(value: f64, format: OutputFormat) -> String {
    match format {
        OutputFormat::Normal => format!("0x{:x}", truncate_u32(value)),
        OutputFormat::Ieee754_32 => format!("0x{:08x}", ieee754::encode_bits32(value)),
        OutputFormat::Ieee754_64 => format!("0x{:016x}", ieee754::encode_bits64(value)),
    }
}

/// Custom-radix text (base `2..=36`), digits `0-9a-z`, on the 32-bit
/// truncation of the value.
pub fn to_radix(value: f64, radix: u32) -> Result<String, CalcError> {
    if !(2..=36).contains(&radix) {
        return Err(CalcError::InvalidRadix { radix });
    }
    let mut rest = truncate_u32(value);
    if rest == 0 {
        return Ok("0".to_string());
    }
    let mut digits = Vec::new();
    while rest > 0 {
        digits.push(RADIX_DIGITS[(rest % radix) as usize] as char);
        rest /= radix;
    }
    Ok(digits.iter().rev().collect())
}

/// Truncate toward zero and wrap into 32 bits; non-finite values map to 0.
fn truncate_u32(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    value.trunc() as i64 as u32
}
