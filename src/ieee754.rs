//! IEEE-754 bit-pattern decoding and encoding.
//!
//! Decoding reconstructs a floating-point value from its raw binary32 or
//! binary64 representation written out as hex or binary digits. The
//! reconstruction is nibble-wise: sign from the top bit of the first
//! nibble, the exponent field spliced out of the first three nibbles, and
//! the significand accumulated from the rest weighted by descending powers
//! of 16. Bit-exact for all normal values; subnormal, infinite, and NaN
//! patterns are decoded as if normal (known limitation).

use crate::error::CalcError;

const BIAS_32: i32 = 127;
const BIAS_64: i32 = 1023;
/// 2^23, the binary32 significand scale
const SCALE_32: f64 = 8_388_608.0;
/// 2^52, the binary64 significand scale
const SCALE_64: f64 = 4_503_599_627_370_496.0;

/// Decode 8 hex digits as a binary32 bit pattern.
pub(crate) fn decode_hex32(digits: &str) -> Result<f64, CalcError> {
    let nibbles = hex_nibbles(digits)?;
    Ok(decode32(&nibbles))
}

/// Decode 16 hex digits as a binary64 bit pattern.
pub(crate) fn decode_hex64(digits: &str) -> Result<f64, CalcError> {
    let nibbles = hex_nibbles(digits)?;
    Ok(decode64(&nibbles))
}

/// Decode 32 binary digits by regrouping them into nibbles first.
pub(crate) fn decode_bin32(digits: &str) -> Result<f64, CalcError> {
    let nibbles = bin_nibbles(digits)?;
    Ok(decode32(&nibbles))
}

/// Decode 64 binary digits by regrouping them into nibbles first.
pub(crate) fn decode_bin64(digits: &str) -> Result<f64, CalcError> {
    let nibbles = bin_nibbles(digits)?;
    Ok(decode64(&nibbles))
}

/// Raw binary32 pattern of `value`, for output formatting.
pub(crate) fn encode_bits32(value: f64) -> u32 {
    (value as f32).to_bits()
}

/// Raw binary64 pattern of `value`, for output formatting.
pub(crate) fn encode_bits64(value: f64) -> u64 {
    value.to_bits()
}

fn decode32(nibbles: &[u8]) -> f64 {
    // 8-bit exponent: nibble 0 bits 0-2, nibble 1, top bit of nibble 2
    let mut exponent = i32::from(nibbles[0] & 7) * 32 + i32::from(nibbles[1]) * 2;
    if nibbles[2] & 8 != 0 {
        exponent += 1;
    }
    exponent -= BIAS_32;

    let mut significand = f64::from(nibbles[2] & 7);
    for &nibble in &nibbles[3..8] {
        significand = significand * 16.0 + f64::from(nibble);
    }

    let mut value = (1.0 + significand / SCALE_32) * 2f64.powi(exponent);
    if nibbles[0] & 8 != 0 {
        value = -value;
    }
    value
}

fn decode64(nibbles: &[u8]) -> f64 {
    // 11-bit exponent: nibble 0 bits 0-2, nibbles 1 and 2
    let exponent =
        i32::from(nibbles[0] & 7) * 256 + i32::from(nibbles[1]) * 16 + i32::from(nibbles[2])
            - BIAS_64;

    let mut significand = 0.0;
    for &nibble in &nibbles[3..16] {
        significand = significand * 16.0 + f64::from(nibble);
    }

    let mut value = (1.0 + significand / SCALE_64) * 2f64.powi(exponent);
    if nibbles[0] & 8 != 0 {
        value = -value;
    }
    value
}

fn hex_nibbles(digits: &str) -> Result<Vec<u8>, CalcError> {
    digits
        .chars()
        .map(|c| {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or_else(|| CalcError::invalid_literal(digits))
        })
        .collect()
}

fn bin_nibbles(digits: &str) -> Result<Vec<u8>, CalcError> {
    let bits = digits
        .chars()
        .map(|c| {
            c.to_digit(2)
                .map(|d| d as u8)
                .ok_or_else(|| CalcError::invalid_literal(digits))
        })
        .collect::<Result<Vec<u8>, CalcError>>()?;

    Ok(bits
        .chunks(4)
        .map(|chunk| chunk.iter().fold(0, |nibble, bit| nibble * 2 + bit))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode32_known_patterns() {
        // pi
        let pi = decode_hex32("40490FDB").unwrap();
        assert_eq!(pi, f64::from(f32::from_bits(0x4049_0FDB)));
        assert!((pi - std::f64::consts::PI).abs() < 1e-6);

        assert_eq!(decode_hex32("3f800000").unwrap(), 1.0);
        assert_eq!(decode_hex32("c0200000").unwrap(), -2.5);
        assert_eq!(decode_hex32("42f6e979").unwrap(), f64::from(f32::from_bits(0x42f6_e979)));
    }

    #[test]
    fn test_decode64_known_patterns() {
        assert_eq!(decode_hex64("400921FB54442D18").unwrap(), std::f64::consts::PI);
        assert_eq!(decode_hex64("3ff0000000000000").unwrap(), 1.0);
        assert_eq!(decode_hex64("c004000000000000").unwrap(), -2.5);
        assert_eq!(
            decode_hex64("4005bf0a8b145769").unwrap(),
            f64::from_bits(0x4005_bf0a_8b14_5769)
        );
    }

    #[test]
    fn test_binary_variants_agree_with_hex() {
        let hex32 = decode_hex32("40490FDB").unwrap();
        let bin32 = decode_bin32(&format!("{:032b}", 0x4049_0FDBu32)).unwrap();
        assert_eq!(hex32, bin32);

        let hex64 = decode_hex64("400921FB54442D18").unwrap();
        let bin64 = decode_bin64(&format!("{:064b}", 0x4009_21FB_5444_2D18u64)).unwrap();
        assert_eq!(hex64, bin64);
    }

    #[test]
    fn test_bad_digits_are_rejected() {
        assert!(decode_hex32("40490FDZ").is_err());
        assert!(decode_bin32("0100000001001001000011111101102x").is_err());
    }

    #[test]
    fn test_encode_roundtrip() {
        assert_eq!(encode_bits32(1.0), 0x3f80_0000);
        assert_eq!(encode_bits64(std::f64::consts::PI), 0x4009_21FB_5444_2D18);
        let decoded = decode_hex32(&format!("{:08x}", encode_bits32(-2.5))).unwrap();
        assert_eq!(decoded, -2.5);
    }
}
