//! Pure transformations over numeric and string sequences
//!
//! Every function in this module borrows its input and builds a new
//! result. None of them fail: unparseable text becomes `0` and empty
//! sequences produce documented sentinel values.

pub mod parsing;
pub mod sequence;
pub mod summary;
pub mod text;

pub use parsing::{parse_number, parse_number_or_zero, strip_currency_prefix};
#[cfg(feature = "alloc")]
pub use parsing::{parse_integers_or_zero, strip_dollars_and_parse};

pub use sequence::{first_negative, sum};
#[cfg(feature = "alloc")]
pub use sequence::{bookend, inject_sum_after_first_negative, triple_all};

pub use summary::write_sum_equation;
#[cfg(feature = "alloc")]
pub use summary::{format_sum, sum_equation, SumEquation};

pub use text::{all_primary_colors, count_short_words, last_char};
#[cfg(feature = "alloc")]
pub use text::shout_filter_exclaim;
