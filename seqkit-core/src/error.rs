//! Error types for seqkit parsing

/// Errors produced by the strict number parser
///
/// The public transformations never surface these; they map any error
/// to the zero fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqError {
    /// Empty or whitespace-only numeric text
    EmptyInput,
    /// Text is not a decimal literal or `Infinity`
    InvalidNumber,
    /// `0x`/`0o`/`0b` prefix not followed by valid digits
    InvalidRadixLiteral,
}

impl core::fmt::Display for SeqError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            SeqError::EmptyInput => "Empty numeric text",
            SeqError::InvalidNumber => "Invalid numeric literal",
            SeqError::InvalidRadixLiteral => "Invalid hex, octal or binary literal",
        };
        write!(f, "{msg}")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SeqError {}

/// Result type for seqkit parsing
pub type Result<T> = core::result::Result<T, SeqError>;
