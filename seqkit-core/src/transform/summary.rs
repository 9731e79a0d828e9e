//! Sum equations such as `6=1+2+3`

use core::fmt::{self, Write};

use crate::constants::{ADDEND_SEPARATOR, EMPTY_SUM_EQUATION, TOTAL_SEPARATOR};
use crate::transform::sequence::sum;
use crate::Numeric;

#[cfg(feature = "alloc")]
use alloc::{string::String, vec::Vec};

/// Structured form of a sum equation
///
/// `Display` renders `"{total}={a1}+...+{an}"`, or `"0=0"` when there
/// are no addends.
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SumEquation<T> {
    /// Sum of all addends
    pub total: T,
    /// Addends in input order
    pub addends: Vec<T>,
}

#[cfg(feature = "alloc")]
impl<T: Numeric> fmt::Display for SumEquation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_equation(self.total, &self.addends, f)
    }
}

/// Write the sum equation for `values` without allocating
pub fn write_sum_equation<T: Numeric, W: Write>(values: &[T], out: &mut W) -> fmt::Result {
    write_equation(sum(values), values, out)
}

/// Build the structured sum equation for `values`
#[cfg(feature = "alloc")]
pub fn sum_equation<T: Numeric>(values: &[T]) -> SumEquation<T> {
    SumEquation {
        total: sum(values),
        addends: values.to_vec(),
    }
}

/// Render `values` as `"{sum}={a1}+...+{an}"`, or `"0=0"` when empty
#[cfg(feature = "alloc")]
pub fn format_sum<T: Numeric>(values: &[T]) -> String {
    let mut rendered = String::new();
    write_sum_equation(values, &mut rendered)
        .expect("Numeric::render returned an error writing to a String");
    rendered
}

fn write_equation<T: Numeric, W: Write>(total: T, addends: &[T], out: &mut W) -> fmt::Result {
    if addends.is_empty() {
        return out.write_str(EMPTY_SUM_EQUATION);
    }

    total.render(out)?;
    out.write_char(TOTAL_SEPARATOR)?;

    for (i, addend) in addends.iter().enumerate() {
        if i > 0 {
            out.write_char(ADDEND_SEPARATOR)?;
        }
        addend.render(out)?;
    }

    Ok(())
}
