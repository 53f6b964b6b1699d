//! The [`MetadataParser`] entry point.
//!
//! ## Example
//!
//! ```rust
//! use readabilityrs_metadata::{MetadataOptions, MetadataParser};
//! use scraper::Html;
//!
//! let html = r#"<html><head>
//!     <meta charset="utf-8">
//!     <title>Docs > Getting Started Guide</title>
//!     <meta name="description" content="Install and run in five minutes.">
//! </head></html>"#;
//!
//! let parser = MetadataParser::new(None)?;
//! let document = Html::parse_document(html);
//! let metadata = parser.parse(&document);
//!
//! assert_eq!(metadata.title, "Getting Started Guide");
//! assert_eq!(metadata.excerpt.as_deref(), Some("Install and run in five minutes."));
//! assert_eq!(metadata.charset.as_deref(), Some("utf-8"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::{
    article::ArticleMetadata,
    error::Result,
    metadata::get_article_metadata,
    options::MetadataOptions,
};
use scraper::Html;

/// Resolves [`ArticleMetadata`] from parsed documents.
///
/// Holds only validated options, so one parser can be reused for any number
/// of documents and shared between threads.
#[derive(Debug, Clone)]
pub struct MetadataParser {
    options: MetadataOptions,
}

impl MetadataParser {
    /// Create a new parser
    ///
    /// # Arguments
    /// * `options` - Optional configuration options
    ///
    /// # Returns
    /// Result containing the parser, or an error if the options are inconsistent
    pub fn new(options: Option<MetadataOptions>) -> Result<Self> {
        let options = options.unwrap_or_default();
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &MetadataOptions {
        &self.options
    }

    /// Extract metadata from an already parsed document.
    pub fn parse(&self, document: &Html) -> ArticleMetadata {
        get_article_metadata(document, &self.options)
    }

    /// Parse `html` with `scraper` and extract its metadata.
    pub fn parse_str(&self, html: &str) -> ArticleMetadata {
        self.parse(&Html::parse_document(html))
    }
}
