//! Article title resolution.
//!
//! The raw document title usually carries the site name or a breadcrumb
//! ("Article - Site", "Site: Article", "Section > Article"). Resolution runs
//! at most one of three cleanup heuristics and then rolls the result back to
//! the raw title if it looks over-truncated:
//!
//! 1. **Separator truncation** when the title contains ` | `, ` - `, ` / `,
//!    ` > ` or ` » `: drop the last segment, or the first one if too little is
//!    left.
//! 2. **Colon split** when the title contains `": "` and no `h1`/`h2` repeats
//!    it verbatim.
//! 3. **Heading fallback** when the title is very short or very long and the
//!    document has exactly one `h1`.
//!
//! Each heuristic is exposed on its own so its intermediate output can be
//! inspected; [`get_article_title`] chains them.

use crate::constants::REGEXPS;
use crate::document::Document;
use crate::options::MetadataOptions;
use crate::utils::{self, word_count};
use scraper::Html;
use tracing::{debug, trace};

/// Outcome of [`strip_separator_segment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSplit {
    /// Title with one segment removed (untrimmed)
    pub title: String,
    /// Whether a hierarchical separator (`/`, `>` or `»`) was present
    pub hierarchical: bool,
}

/// Raw title of the document.
///
/// Reads `<title>`; when that is missing or blank, falls back to the inner
/// text of the first element with `id="title"`. Returns `None` when neither
/// yields anything.
pub(crate) fn raw_title(document: Document<'_>) -> Option<String> {
    let declared = document.title().ok().flatten().unwrap_or_default();
    if !declared.trim().is_empty() {
        return Some(declared);
    }

    document
        .element_by_id("title")
        .map(|element| utils::get_inner_text(&element))
}

/// Remove the site-name segment around a ` | `, ` - `, ` / `, ` > ` or ` » `
/// separator.
///
/// Keeps everything before the last separator; if that leaves fewer than
/// three words, keeps everything after the first separator instead. Returns
/// `None` when the title contains no separator.
pub fn strip_separator_segment(title: &str) -> Option<SeparatorSplit> {
    if !REGEXPS.title_separator.is_match(title) {
        return None;
    }

    let hierarchical = REGEXPS.title_hierarchical_separator.is_match(title);
    let mut stripped = REGEXPS
        .title_before_last_separator
        .replace_all(title, "$1")
        .into_owned();

    if word_count(&stripped) < 3 {
        trace!(title = %stripped, "leading segment too short, dropping first segment instead");
        stripped = REGEXPS
            .title_after_first_separator
            .replace_all(title, "$1")
            .into_owned();
    }

    Some(SeparatorSplit {
        title: stripped,
        hierarchical,
    })
}

/// Split a `"Site: Article"` style title on its colons.
///
/// `heading_matches` tells whether an `h1`/`h2` repeats the title verbatim,
/// in which case the colon belongs to the real title and it is returned
/// unchanged. Returns `None` when the title contains no `": "`.
pub fn split_on_colon(title: &str, heading_matches: bool) -> Option<String> {
    if !title.contains(": ") {
        return None;
    }
    if heading_matches {
        return Some(title.to_string());
    }

    let (Some(first), Some(last)) = (title.find(':'), title.rfind(':')) else {
        return Some(title.to_string());
    };

    let after_last = &title[last + 1..];
    if word_count(after_last) < 3 {
        return Some(title[first + 1..].to_string());
    }
    if word_count(&title[..first]) > 5 {
        trace!("too many words before the colon, keeping original title");
        return Some(title.to_string());
    }

    Some(after_last.to_string())
}

/// Replace a title that is too short or too long with the text of the only
/// `h1`. Returns `None` when the title length is acceptable or the document
/// does not have exactly one `h1`.
pub fn heading_fallback(title: &str, document: &Html, options: &MetadataOptions) -> Option<String> {
    lone_heading(title, Document::new(document), options)
}

pub(crate) fn lone_heading(
    title: &str,
    document: Document<'_>,
    options: &MetadataOptions,
) -> Option<String> {
    let length = title.chars().count();
    if length >= options.min_title_length && length <= options.max_title_length {
        return None;
    }

    let h1s = document.elements_by_tag("h1").ok()?;
    match h1s.as_slice() {
        [only] => Some(utils::get_inner_text(only)),
        _ => None,
    }
}

/// Final sanity check on a cleaned title.
///
/// A result of four words or fewer is considered over-truncated and the
/// original title is returned, unless a hierarchical separator was used and
/// exactly one word's worth of the original was removed.
pub fn rollback_if_over_truncated(title: &str, original: &str, hierarchical: bool) -> String {
    let title = title.trim();
    let count = word_count(title);

    if count <= 4 {
        let original_without_separators = REGEXPS.title_separator_chars.replace_all(original, "");
        let original_count = word_count(&original_without_separators);
        if !hierarchical || count + 1 != original_count {
            debug!(cleaned = %title, "cleaned title too short, using original title");
            return original.to_string();
        }
    }

    title.to_string()
}

/// Resolve the best article title for a parsed document.
///
/// Never fails: a document without any usable title resolves to `""`.
pub fn get_article_title(document: &Html, options: &MetadataOptions) -> String {
    resolve_title(Document::new(document), options)
}

pub(crate) fn resolve_title(document: Document<'_>, options: &MetadataOptions) -> String {
    let original = raw_title(document).unwrap_or_default();
    let mut hierarchical = false;

    let current = if let Some(split) = strip_separator_segment(&original) {
        debug!(title = %original, "stripping separator segment");
        hierarchical = split.hierarchical;
        split.title
    } else if original.contains(": ") {
        debug!(title = %original, "splitting title on colon");
        let heading_matches = document.has_heading_with_text(&original).unwrap_or(false);
        split_on_colon(&original, heading_matches).unwrap_or_else(|| original.clone())
    } else if let Some(heading) = lone_heading(&original, document, options) {
        debug!(heading = %heading, "using lone h1 as title");
        heading
    } else {
        original.clone()
    };

    rollback_if_over_truncated(&current, &original, hierarchical)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title_of(html: &str) -> String {
        let document = Html::parse_document(html);
        get_article_title(&document, &MetadataOptions::default())
    }

    fn page(title: &str, body: &str) -> String {
        format!("<html><head><title>{title}</title></head><body>{body}</body></html>")
    }

    #[test]
    fn separator_strips_trailing_site_name() {
        let split = strip_separator_segment("Article Title - Site Name").unwrap();
        assert_eq!(split.title.trim(), "Article Title");
        assert!(!split.hierarchical);
    }

    #[test]
    fn separator_falls_back_to_leading_segment() {
        let split = strip_separator_segment("Site | A").unwrap();
        assert_eq!(split.title.trim(), "A");
    }

    #[test]
    fn separator_detects_hierarchy() {
        assert!(strip_separator_segment("Home » News » Story").unwrap().hierarchical);
        assert!(strip_separator_segment("a / b").unwrap().hierarchical);
        assert!(strip_separator_segment("Spider-Man Returns").is_none());
    }

    #[test]
    fn colon_uses_text_after_last_colon() {
        assert_eq!(
            split_on_colon("My Post: The Subtitle", false).unwrap().trim(),
            "The Subtitle"
        );
    }

    #[test]
    fn colon_kept_when_heading_matches() {
        assert_eq!(
            split_on_colon("My Post: The Subtitle", true).unwrap(),
            "My Post: The Subtitle"
        );
    }

    #[test]
    fn colon_uses_first_colon_when_tail_is_short() {
        assert_eq!(
            split_on_colon("Site: Long Article Name: Part", false).unwrap(),
            " Long Article Name: Part"
        );
    }

    #[test]
    fn colon_rejected_after_long_prefix() {
        let title = "This is a rather long site prefix: Short Subtitle Only Here";
        assert_eq!(split_on_colon(title, false).unwrap(), title);
        assert!(split_on_colon("No colon here", false).is_none());
    }

    #[test]
    fn short_title_uses_single_h1() {
        let html = page("Short page", "<h1>Real Article Title Here</h1>");
        let document = Html::parse_document(&html);
        let fallback = heading_fallback("Short page", &document, &MetadataOptions::default());
        assert_eq!(fallback, Some("Real Article Title Here".to_string()));
    }

    #[test]
    fn heading_fallback_needs_exactly_one_h1() {
        let html = page("Short page", "<h1>One</h1><h1>Two</h1>");
        let document = Html::parse_document(&html);
        assert_eq!(
            heading_fallback("Short page", &document, &MetadataOptions::default()),
            None
        );
    }

    #[test]
    fn resolves_long_title_with_site_suffix() {
        assert_eq!(
            title_of(&page("How We Rebuilt Our Search Engine - Example Blog", "")),
            "How We Rebuilt Our Search Engine"
        );
    }

    #[test]
    fn resolves_colon_prefixed_title() {
        assert_eq!(
            title_of(&page("Example Blog: How We Rebuilt Our Search Engine", "")),
            "How We Rebuilt Our Search Engine"
        );
    }

    #[test]
    fn matching_heading_keeps_colon_title() {
        let title = "Example Blog: How We Rebuilt Our Search Engine";
        assert_eq!(
            title_of(&page(title, &format!("<h1>{title}</h1>"))),
            title
        );
    }

    #[test]
    fn short_result_rolls_back_to_original() {
        assert_eq!(
            title_of(&page("Getting Started Guide - Docs", "")),
            "Getting Started Guide - Docs"
        );
        assert_eq!(title_of(&page("My Post: The Subtitle", "")), "My Post: The Subtitle");
    }

    #[test]
    fn hierarchical_separator_keeps_one_segment_cut() {
        assert_eq!(
            title_of(&page("Docs > Getting Started Guide", "")),
            "Getting Started Guide"
        );
    }

    #[test]
    fn lone_h1_replaces_short_title() {
        assert_eq!(
            title_of(&page("Short", "<h1>How We Rebuilt Our Search Engine</h1>")),
            "How We Rebuilt Our Search Engine"
        );
    }

    #[test]
    fn lone_h1_replaces_long_title() {
        let long_title = "word ".repeat(40);
        let html = page(&long_title, "<h1>The One Real Heading Of This Page</h1>");
        let document = Html::parse_document(&html);
        assert_eq!(
            heading_fallback(long_title.trim(), &document, &MetadataOptions::default()),
            Some("The One Real Heading Of This Page".to_string())
        );
        assert_eq!(title_of(&html), "The One Real Heading Of This Page");
    }

    #[test]
    fn heading_fallback_length_bounds_are_inclusive() {
        let html = page("ignored", "<h1>The One Real Heading Of This Page</h1>");
        let document = Html::parse_document(&html);
        let options = MetadataOptions::default();

        let fifteen = "Fifteen chars!!";
        assert_eq!(fifteen.chars().count(), 15);
        assert_eq!(heading_fallback(fifteen, &document, &options), None);

        let one_fifty = "x".repeat(150);
        assert_eq!(heading_fallback(&one_fifty, &document, &options), None);

        assert!(heading_fallback("Fourteen chars", &document, &options).is_some());
        assert!(heading_fallback(&"x".repeat(151), &document, &options).is_some());
    }

    #[test]
    fn indented_heading_keeps_colon_title() {
        let title = "Example Blog: How We Rebuilt Our Search Engine";
        let body = format!("<h1>\n    {title}\n  </h1>");
        assert_eq!(title_of(&page(title, &body)), title);
    }

    #[test]
    fn falls_back_to_element_with_title_id() {
        let html = r#"<html><head><title>  </title></head>
            <body><div id="title">  The   Story of a Very Long Day  </div></body></html>"#;
        assert_eq!(title_of(html), "The Story of a Very Long Day");
    }

    #[test]
    fn empty_document_resolves_to_empty_string() {
        assert_eq!(title_of("<html><body></body></html>"), "");
        assert_eq!(title_of(""), "");
    }

    #[test]
    fn rollback_arithmetic() {
        assert_eq!(
            rollback_if_over_truncated(" B C D ", "A / B C D", true),
            "B C D"
        );
        assert_eq!(
            rollback_if_over_truncated(" C D ", "A / B / C D", true),
            "A / B / C D"
        );
        assert_eq!(
            rollback_if_over_truncated("B C D", "A | B C D", false),
            "A | B C D"
        );
        assert_eq!(
            rollback_if_over_truncated("One Two Three Four Five", "Whatever", false),
            "One Two Three Four Five"
        );
    }

    #[test]
    fn resolution_is_idempotent() {
        let html = page("Docs > Getting Started Guide", "<h1>Getting Started</h1>");
        let document = Html::parse_document(&html);
        let options = MetadataOptions::default();
        let first = get_article_title(&document, &options);
        let second = get_article_title(&document, &options);
        assert_eq!(first, second);
    }
}
