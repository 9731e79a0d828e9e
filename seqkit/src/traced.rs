//! Transformations that emit `tracing` events
//!
//! Each function returns exactly what its `seqkit-core` counterpart
//! returns. Input sizes are logged at `trace` level; zero fallbacks
//! during parsing are logged at `debug` level by [`parse_with_report`].

use seqkit_core::Numeric;
use tracing::trace;

use crate::report::parse_with_report;

/// First and last element, see [`seqkit_core::bookend`]
pub fn bookend<T: Copy>(values: &[T]) -> Vec<T> {
    trace!(len = values.len(), "bookend");
    seqkit_core::bookend(values)
}

/// Every element times three, see [`seqkit_core::triple_all`]
pub fn triple_all<T: Numeric>(values: &[T]) -> Vec<T> {
    trace!(len = values.len(), "triple_all");
    seqkit_core::triple_all(values)
}

/// Parse with a zero fallback, logging each fallback at `debug`
pub fn parse_integers_or_zero<S: AsRef<str>>(strings: &[S]) -> Vec<f64> {
    trace!(len = strings.len(), "parse_integers_or_zero");
    parse_with_report(strings, false).values
}

/// Strip one leading `$` and parse, logging each fallback at `debug`
pub fn strip_dollars_and_parse<S: AsRef<str>>(amounts: &[S]) -> Vec<f64> {
    trace!(len = amounts.len(), "strip_dollars_and_parse");
    parse_with_report(amounts, true).values
}

/// Drop questions and upper-case exclamations, see [`seqkit_core::shout_filter_exclaim`]
pub fn shout_filter_exclaim<S: AsRef<str>>(messages: &[S]) -> Vec<String> {
    let shouted = seqkit_core::shout_filter_exclaim(messages);
    trace!(
        len = messages.len(),
        kept = shouted.len(),
        "shout_filter_exclaim"
    );
    shouted
}

/// Count words shorter than four UTF-16 code units
pub fn count_short_words<S: AsRef<str>>(words: &[S]) -> usize {
    let count = seqkit_core::count_short_words(words);
    trace!(len = words.len(), count, "count_short_words");
    count
}

/// Whether every color is `red`, `blue` or `green`
pub fn all_primary_colors<S: AsRef<str>>(colors: &[S]) -> bool {
    let all = seqkit_core::all_primary_colors(colors);
    trace!(len = colors.len(), all, "all_primary_colors");
    all
}

/// Render `"{sum}={a1}+...+{an}"`, see [`seqkit_core::format_sum`]
pub fn format_sum<T: Numeric>(values: &[T]) -> String {
    trace!(len = values.len(), "format_sum");
    seqkit_core::format_sum(values)
}

/// Insert the running sum after the first negative element
pub fn inject_sum_after_first_negative<T: Numeric>(values: &[T]) -> Vec<T> {
    let negative_at = seqkit_core::first_negative(values);
    trace!(len = values.len(), ?negative_at, "inject_sum_after_first_negative");
    seqkit_core::inject_sum_after_first_negative(values)
}
