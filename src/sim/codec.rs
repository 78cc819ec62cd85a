// sim/codec.rs
//! Fixed-width two's-complement hex conversions.
//!
//! Everything here is bit arithmetic on `u64`; no value ever goes through a
//! float, so the 63/64-bit boundary is exact.

use super::errors::CodecError;

const MAX_DIGITS: u32 = 16;

#[inline]
fn mask(bits: u32) -> u64 {
    if bits >= 64 { u64::MAX } else { (1u64 << bits) - 1 }
}

/// Low `4 * digits` bits of `value` as exactly `digits` uppercase hex digits.
pub fn decimal_to_hex(value: i64, digits: u32) -> String {
    let digits = digits.clamp(1, MAX_DIGITS);
    let bits = value as u64 & mask(digits * 4);
    format!("{bits:0width$X}", width = digits as usize)
}

/// Reads `hex` as a `4 * len`-bit two's-complement number.
pub fn hex_to_decimal(hex: &str) -> Result<i64, CodecError> {
    let raw = parse_hex_unsigned(hex)?;
    let bits = hex.len() as u32 * 4;
    if bits >= 64 {
        return Ok(raw as i64);
    }
    let sign = 1u64 << (bits - 1);
    // sign-extend from `bits` to 64
    Ok(((raw ^ sign).wrapping_sub(sign)) as i64)
}

/// Plain unsigned hex, at most 16 digits, no prefix.
pub fn parse_hex_unsigned(hex: &str) -> Result<u64, CodecError> {
    if hex.is_empty() {
        return Err(CodecError::Empty);
    }
    if hex.len() > MAX_DIGITS as usize {
        return Err(CodecError::TooWide(hex.to_string()));
    }
    let mut acc = 0u64;
    for c in hex.chars() {
        let d = c.to_digit(16).ok_or(CodecError::BadDigit(c))?;
        acc = (acc << 4) | d as u64;
    }
    Ok(acc)
}

/// Sign-extends the low `bits` of `value`.
#[inline]
pub fn sext(value: u64, bits: u32) -> i64 {
    if bits >= 64 {
        return value as i64;
    }
    let shift = 64 - bits;
    ((value << shift) as i64) >> shift
}
