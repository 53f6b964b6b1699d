//! Metadata resolution: combines `<meta>` tag values with the cleaned title.

use crate::article::ArticleMetadata;
use crate::document::Document;
use crate::meta_tags::{self, MetaTags};
use crate::options::MetadataOptions;
use crate::title;
use scraper::Html;
use tracing::{debug, instrument};

const EXCERPT_KEYS: [&str; 3] = ["description", "og:description", "twitter:description"];

const TITLE_KEYS: [&str; 2] = ["og:title", "twitter:title"];

/// Scan a document's `<meta>` tags.
pub fn get_meta_tags(document: &Html) -> MetaTags {
    meta_tags::scan(Document::new(document))
}

/// Extract title, byline, excerpt and charset from a parsed document.
///
/// Never fails; missing information yields an empty title or `None` fields.
#[instrument(skip_all)]
pub fn get_article_metadata(document: &Html, options: &MetadataOptions) -> ArticleMetadata {
    let document = Document::new(document);
    let tags = meta_tags::scan(document);

    let excerpt = tags.first_of(&EXCERPT_KEYS).map(str::to_string);

    let mut title = title::resolve_title(document, options);
    if title.trim().is_empty() {
        title = tags.first_of(&TITLE_KEYS).unwrap_or_default().to_string();
        debug!(title = %title, "document title blank, using meta title");
    }

    let charset = document
        .declared_charset()
        .or_else(|| options.fallback_charset.clone());

    ArticleMetadata {
        title,
        byline: tags.byline,
        excerpt,
        charset,
    }
}
