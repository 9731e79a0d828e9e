//! Zero-fallback reporting for number parsing
//!
//! The plain parsers silently replace unparseable text with `0`. A
//! [`ParseReport`] keeps the same values but also records which inputs
//! were replaced and why, so callers can tell a literal `"0"` apart from
//! a fallback.

use seqkit_core::{parse_number, strip_currency_prefix, SeqError};
use tracing::debug;

/// Parsed values plus the positions that fell back to zero
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseReport {
    /// One value per input, `0.0` where parsing failed
    pub values: Vec<f64>,
    /// Inputs that were replaced by zero, in input order
    pub fallbacks: Vec<Fallback>,
}

/// A single input that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Fallback {
    /// Position in the input slice
    pub index: usize,
    /// Why parsing failed
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_reason"))]
    pub reason: SeqError,
}

impl ParseReport {
    /// Whether every input parsed cleanly
    pub fn is_clean(&self) -> bool {
        self.fallbacks.is_empty()
    }

    /// Indices of inputs that fell back to zero
    pub fn fallback_indices(&self) -> Vec<usize> {
        self.fallbacks.iter().map(|fallback| fallback.index).collect()
    }
}

/// Parse every string, recording each zero fallback
///
/// With `strip_currency` set, a single leading `$` is removed first, the
/// same way `strip_dollars_and_parse` does. The resulting `values` are
/// identical to the plain parsers' output.
pub fn parse_with_report<S: AsRef<str>>(strings: &[S], strip_currency: bool) -> ParseReport {
    let mut report = ParseReport {
        values: Vec::with_capacity(strings.len()),
        fallbacks: Vec::new(),
    };

    for (index, raw) in strings.iter().enumerate() {
        let raw = raw.as_ref();
        let text = if strip_currency {
            strip_currency_prefix(raw)
        } else {
            raw
        };

        match parse_number(text) {
            Ok(value) => report.values.push(value),
            Err(reason) => {
                debug!("Input {} ({:?}) fell back to zero: {}", index, raw, reason);
                report.values.push(0.0);
                report.fallbacks.push(Fallback { index, reason });
            }
        }
    }

    report
}

#[cfg(feature = "serde")]
fn serialize_reason<S: serde::Serializer>(
    reason: &SeqError,
    serializer: S,
) -> core::result::Result<S::Ok, S::Error> {
    serializer.collect_str(reason)
}
