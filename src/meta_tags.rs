//! `<meta>` tag scanning.
//!
//! Every `<meta>` element is classified once, in document order, as either an
//! author tag, a recognised description/title tag (plain, Open Graph or
//! Twitter Cards), or noise. The result is folded into an immutable
//! [`MetaTags`] value.

use crate::constants::REGEXPS;
use crate::document::{attr, Document};
use crate::utils;
use scraper::ElementRef;
use std::collections::HashMap;
use tracing::trace;

/// Values collected from a document's `<meta>` tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaTags {
    /// `content` of the last `name="author"` / `property="author"` tag
    pub byline: Option<String>,
    /// Normalized key (lowercase, whitespace removed) to trimmed content
    pub values: HashMap<String, String>,
}

impl MetaTags {
    /// Value stored under a normalized key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// First key present in `keys`, in priority order.
    pub fn first_of(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.get(key))
    }

    fn record(mut self, meta: &ElementRef) -> Self {
        let name = attr(meta, "name");
        let property = attr(meta, "property");

        if name == "author" || property == "author" {
            self.byline = Some(attr(meta, "content").to_string());
            return self;
        }

        let matched = if REGEXPS.meta_name.is_match(name) {
            Some(name)
        } else if REGEXPS.meta_property.is_match(property) {
            Some(property)
        } else {
            None
        };

        if let Some(key) = matched {
            let content = attr(meta, "content");
            if !content.trim().is_empty() {
                let key = normalize_key(key);
                trace!(key = %key, "recorded meta value");
                self.values
                    .insert(key, utils::collapse_double_spaces(content.trim()));
            }
        }

        self
    }
}

/// Lowercase a meta key and drop every whitespace character.
pub fn normalize_key(key: &str) -> String {
    key.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

pub(crate) fn scan(document: Document<'_>) -> MetaTags {
    document
        .elements_by_tag("meta")
        .unwrap_or_default()
        .iter()
        .fold(MetaTags::default(), |tags, meta| tags.record(meta))
}
