//! seqkit - Sequence and String Transformations
//!
//! This library bundles nine small, pure transformations over sequences
//! of numbers and strings, together with a traced variant of each and a
//! parse report that records which inputs fell back to zero.
//!
//! ## Architecture
//!
//! seqkit follows a core/implementation separation:
//!
//! - **seqkit-core**: Pure `no_std` transformations, the strict number
//!   parser and the `Numeric` element trait (no I/O, no logging)
//! - **seqkit**: std conveniences: `tracing` instrumentation and
//!   fallback reporting
//!
//! ## Quick Start
//!
//! ```rust
//! use seqkit::{format_sum, inject_sum_after_first_negative, strip_dollars_and_parse};
//!
//! let amounts = strip_dollars_and_parse(&["$5", "10", "$abc"]);
//! assert_eq!(amounts, vec![5.0, 10.0, 0.0]);
//!
//! assert_eq!(format_sum(&[1, 2, 3]), "6=1+2+3");
//! assert_eq!(inject_sum_after_first_negative(&[1, 9, -5, 7]), vec![1, 9, -5, 10, 7]);
//! ```
//!
//! ## Features
//!
//! - **serde** (default): `Serialize`/`Deserialize` for `SumEquation`,
//!   `Serialize` for `ParseReport`

// Re-export core abstractions and transformations
pub use seqkit_core::{
    // Element trait
    Numeric,
    // Error handling
    Result, SeqError,
    // Sequence transformations
    bookend, first_negative, inject_sum_after_first_negative, sum, triple_all,
    // Parsing
    parse_integers_or_zero, parse_number, parse_number_or_zero, strip_currency_prefix,
    strip_dollars_and_parse,
    // Text
    all_primary_colors, count_short_words, last_char, shout_filter_exclaim,
    // Sum equations
    format_sum, sum_equation, write_sum_equation, SumEquation,
};

pub use seqkit_core::constants;

// Implementation modules
pub mod report;
pub mod traced;

// Public exports
pub use report::{parse_with_report, ParseReport};
