//! Text helpers shared by the resolvers.

use crate::constants::REGEXPS;
use scraper::ElementRef;

/// Count the segments produced by splitting `text` on runs of whitespace.
///
/// Empty leading and trailing segments are counted, so `""` yields 1 and
/// `"Site "` yields 2. The title heuristics depend on this exact arithmetic.
pub fn word_count(text: &str) -> usize {
    REGEXPS.whitespace.split(text).count()
}

/// Trimmed text content of an element with whitespace runs collapsed to a
/// single space.
pub fn get_inner_text(element: &ElementRef) -> String {
    let text = element.text().collect::<String>();
    REGEXPS.normalize.replace_all(text.trim(), " ").into_owned()
}

/// Collapse every whitespace run to one space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replace each pair of consecutive spaces with a single one, in one pass.
///
/// Three spaces become two: this mirrors a plain substring replacement rather
/// than a full whitespace normalization.
pub fn collapse_double_spaces(text: &str) -> String {
    text.replace("  ", " ")
}
