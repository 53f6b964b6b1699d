//! Compiled regular expressions shared by the metadata resolvers.
//!
//! Patterns are compiled once on first use and never change afterwards, so the
//! matching functions built on them stay pure.

use once_cell::sync::Lazy;
use regex::Regex;

/// Regular expressions used throughout metadata resolution
pub struct Regexps {
    /// Meta `name` values we care about: `description`, `title` and their
    /// Twitter Cards variants
    pub meta_name: Regex,
    /// Open Graph `property` values: `og:description`, `og:title`
    pub meta_property: Regex,
    /// A title separator surrounded by single spaces
    pub title_separator: Regex,
    /// A hierarchical separator (`/`, `>`, `»`) surrounded by single spaces
    pub title_hierarchical_separator: Regex,
    /// Everything before the last separator that is followed by a space
    pub title_before_last_separator: Regex,
    /// Everything after the first separator
    pub title_after_first_separator: Regex,
    /// Runs of separator characters
    pub title_separator_chars: Regex,
    /// Any run of whitespace
    pub whitespace: Regex,
    /// Two or more whitespace characters
    pub normalize: Regex,
    /// `charset=` parameter inside a `Content-Type` value
    pub content_type_charset: Regex,
}

pub static REGEXPS: Lazy<Regexps> = Lazy::new(|| Regexps {
    meta_name: Regex::new(r"(?i)^\s*((twitter)\s*:\s*)?(description|title)\s*$").unwrap(),
    meta_property: Regex::new(r"(?i)^\s*og\s*:\s*(description|title)\s*$").unwrap(),
    title_separator: Regex::new(r" [|\-/>»] ").unwrap(),
    title_hierarchical_separator: Regex::new(r" [/>»] ").unwrap(),
    title_before_last_separator: Regex::new(r"(?i)(.*)[|\-/>»] .*").unwrap(),
    title_after_first_separator: Regex::new(r"(?i)[^|\-/>»]*[|\-/>»](.*)").unwrap(),
    title_separator_chars: Regex::new(r"[|\-/>»]+").unwrap(),
    whitespace: Regex::new(r"\s+").unwrap(),
    normalize: Regex::new(r"\s{2,}").unwrap(),
    content_type_charset: Regex::new(r#"(?i)charset\s*=\s*["']?([^\s;"']+)"#).unwrap(),
});

/// Title length (in characters) below which the lone `<h1>` is preferred
pub const DEFAULT_MIN_TITLE_LENGTH: usize = 15;

/// Title length (in characters) above which the lone `<h1>` is preferred
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 150;
