//! Named constants shared by the transformations

/// Colors accepted by `all_primary_colors` (exact, case-sensitive match)
pub const PRIMARY_COLORS: [&str; 3] = ["red", "blue", "green"];

/// Words strictly shorter than this many characters count as short
pub const SHORT_WORD_LIMIT: usize = 4;

/// Factor applied by `triple_all`
pub const TRIPLE_FACTOR: u8 = 3;

/// Single leading character removed by `strip_dollars_and_parse`
pub const CURRENCY_PREFIX: char = '$';

/// Rendering of an empty sum equation
pub const EMPTY_SUM_EQUATION: &str = "0=0";

/// Separates the total from the addends
pub const TOTAL_SEPARATOR: char = '=';

/// Separates addends from each other
pub const ADDEND_SEPARATOR: char = '+';

/// Trailing character of a question; such strings are dropped
pub const QUESTION_MARK: char = '?';

/// Trailing character of an exclamation; such strings are upper-cased
pub const EXCLAMATION_MARK: char = '!';

/// Textual spelling of infinity accepted by the parser
pub const INFINITY_LITERAL: &str = "Infinity";
