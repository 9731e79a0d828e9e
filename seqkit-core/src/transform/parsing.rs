//! Number parsing with a zero fallback
//!
//! [`parse_number`] is the strict parser. It accepts the same literals
//! a dynamic-language `Number()` coercion does: surrounding whitespace
//! is ignored, decimal and exponent forms are allowed, `0x`/`0o`/`0b`
//! prefixes select a radix, and `Infinity` may carry a sign. Everything
//! else is rejected, including `inf`, `NaN` and `1_000`.

use crate::constants::{CURRENCY_PREFIX, INFINITY_LITERAL};
use crate::SeqError;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Parse a complete string as a number
///
/// Empty or whitespace-only text is [`SeqError::EmptyInput`].
pub fn parse_number(text: &str) -> Result<f64, SeqError> {
    let trimmed = text.trim_matches(is_numeric_whitespace);
    if trimmed.is_empty() {
        return Err(SeqError::EmptyInput);
    }

    if let Some(value) = parse_infinity(trimmed) {
        return Ok(value);
    }

    if let Some((radix, digits)) = split_radix_prefix(trimmed) {
        return parse_radix_digits(digits, radix);
    }

    parse_decimal(trimmed)
}

/// Parse a string as a number, or `0.0` if it is not one
pub fn parse_number_or_zero(text: &str) -> f64 {
    parse_number(text).unwrap_or(0.0)
}

/// Remove a single leading `$`, if present
pub fn strip_currency_prefix(text: &str) -> &str {
    text.strip_prefix(CURRENCY_PREFIX).unwrap_or(text)
}

/// Parse every string, mapping unparseable entries to `0`
#[cfg(feature = "alloc")]
pub fn parse_integers_or_zero<S: AsRef<str>>(strings: &[S]) -> Vec<f64> {
    strings
        .iter()
        .map(|s| parse_number_or_zero(s.as_ref()))
        .collect()
}

/// Strip one leading `$` from every string, then parse with a zero fallback
///
/// Only a single `$` is removed, so `"$$5"` parses to `0`.
#[cfg(feature = "alloc")]
pub fn strip_dollars_and_parse<S: AsRef<str>>(amounts: &[S]) -> Vec<f64> {
    amounts
        .iter()
        .map(|s| parse_number_or_zero(strip_currency_prefix(s.as_ref())))
        .collect()
}

/// `Number()` whitespace: Unicode whitespace minus NEL, plus the BOM
fn is_numeric_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

fn parse_infinity(text: &str) -> Option<f64> {
    match text.strip_prefix('-') {
        Some(rest) => (rest == INFINITY_LITERAL).then_some(f64::NEG_INFINITY),
        None => {
            let unsigned = text.strip_prefix('+').unwrap_or(text);
            (unsigned == INFINITY_LITERAL).then_some(f64::INFINITY)
        }
    }
}

/// Split `0x`/`0o`/`0b` (either case) off the front of a literal
fn split_radix_prefix(text: &str) -> Option<(u32, &str)> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }

    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    Some((radix, &text[2..]))
}

fn parse_radix_digits(digits: &str, radix: u32) -> Result<f64, SeqError> {
    if digits.is_empty() {
        return Err(SeqError::InvalidRadixLiteral);
    }

    // Accumulate in f64 so long literals lose precision instead of overflowing
    let mut value = 0.0_f64;
    for c in digits.chars() {
        let digit = c.to_digit(radix).ok_or(SeqError::InvalidRadixLiteral)?;
        value = value * f64::from(radix) + f64::from(digit);
    }

    Ok(value)
}

fn parse_decimal(text: &str) -> Result<f64, SeqError> {
    // Rejects the letters `f64::from_str` would otherwise accept (inf, nan)
    let well_formed = text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !well_formed {
        return Err(SeqError::InvalidNumber);
    }

    text.parse::<f64>().map_err(|_| SeqError::InvalidNumber)
}
