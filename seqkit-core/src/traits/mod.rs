//! Element traits for numeric sequences

pub mod element;

pub use element::Numeric;
