#![no_std]

//! seqkit Core - Sequence and String Transformations
//!
//! This crate provides pure transformations over small in-memory
//! sequences of numbers and strings. Nothing here performs I/O, holds
//! state, or mutates its input: every function borrows a slice and
//! returns freshly built data.
//!
//! Operations that return owned `Vec`/`String` values require the
//! `alloc` feature (enabled by default). Scalar operations such as
//! [`count_short_words`], [`all_primary_colors`] and [`parse_number`]
//! work without it.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod constants;
pub mod error;
pub mod traits;
pub mod transform;

pub use error::*;
pub use traits::*;
pub use transform::*;
