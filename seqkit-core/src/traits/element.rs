//! Numeric element constraints for sequence transformations
//!
//! This module defines the trait that constrains what types can appear
//! in the numeric sequences accepted by `triple_all`, `format_sum` and
//! `inject_sum_after_first_negative`.

use core::fmt::{self, Write};

/// Trait for types that can be stored in a numeric sequence
///
/// All element types must be:
/// - Copy: elements are read out of borrowed slices by value
/// - PartialOrd: needed to detect negative values
/// - Display: used as the default textual rendering
///
/// Integer implementations saturate at their bounds instead of
/// overflowing, so no transformation can panic.
pub trait Numeric: Copy + PartialOrd + fmt::Display + Sized {
    /// Additive identity
    const ZERO: Self;

    /// Add two values
    fn accumulate(self, rhs: Self) -> Self;

    /// Multiply by a small constant factor
    fn scale(self, factor: u8) -> Self;

    /// Whether the value is strictly below zero
    fn is_negative(self) -> bool {
        self < Self::ZERO
    }

    /// Write the value's textual form
    ///
    /// Used by sum equations. Defaults to `Display`.
    fn render<W: Write>(self, out: &mut W) -> fmt::Result {
        write!(out, "{self}")
    }
}

/// Magnitudes at or above this render in exponent form
const EXPONENT_UPPER: f64 = 1e21;

/// Nonzero magnitudes below this render in exponent form
const EXPONENT_LOWER: f64 = 1e-6;

/// Forwards `{:e}` output, adding `+` to non-negative exponents
struct SignedExponent<'a, W> {
    out: &'a mut W,
    after_e: bool,
}

impl<W: Write> Write for SignedExponent<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.after_e && c != '-' {
                self.out.write_char('+')?;
            }
            self.after_e = c == 'e';
            self.out.write_char(c)?;
        }
        Ok(())
    }
}

// Floats render non-finite values as `Infinity`/`-Infinity`/`NaN`,
// collapse negative zero to `0`, and switch to `1e+21` / `1e-7` style
// outside [1e-6, 1e21).
macro_rules! impl_numeric_float {
    ($($ty:ty),*) => {$(
        impl Numeric for $ty {
            const ZERO: Self = 0.0;

            fn accumulate(self, rhs: Self) -> Self {
                self + rhs
            }

            fn scale(self, factor: u8) -> Self {
                self * <$ty>::from(factor)
            }

            fn render<W: Write>(self, out: &mut W) -> fmt::Result {
                if self.is_nan() {
                    out.write_str("NaN")
                } else if self.is_infinite() {
                    if self > 0.0 {
                        out.write_str("Infinity")
                    } else {
                        out.write_str("-Infinity")
                    }
                } else if self == 0.0 {
                    out.write_char('0')
                } else {
                    let magnitude = f64::from(if self < 0.0 { -self } else { self });
                    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
                        let mut signed = SignedExponent { out, after_e: false };
                        write!(signed, "{self:e}")
                    } else {
                        write!(out, "{self}")
                    }
                }
            }
        }
    )*};
}

macro_rules! impl_numeric_int {
    ($($ty:ty),*) => {$(
        impl Numeric for $ty {
            const ZERO: Self = 0;

            fn accumulate(self, rhs: Self) -> Self {
                self.saturating_add(rhs)
            }

            fn scale(self, factor: u8) -> Self {
                self.saturating_mul(<$ty>::from(factor))
            }
        }
    )*};
}

impl_numeric_float!(f32, f64);
impl_numeric_int!(i32, i64, u32, u64);
