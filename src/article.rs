//! Metadata record produced for a document.
//!
//! ## Example
//!
//! ```rust
//! use readabilityrs_metadata::MetadataParser;
//!
//! let html = r#"<html><head>
//!     <title>How We Rebuilt Our Search Engine - Example Blog</title>
//!     <meta name="author" content="Jane Smith">
//! </head></html>"#;
//!
//! let metadata = MetadataParser::new(None).unwrap().parse_str(html);
//! assert_eq!(metadata.title, "How We Rebuilt Our Search Engine");
//! assert_eq!(metadata.byline.as_deref(), Some("Jane Smith"));
//! ```

use serde::{Deserialize, Serialize};

/// Title, author, description and encoding of an article.
///
/// Built once per document; nothing in this crate changes it afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleMetadata {
    /// Cleaned article title.
    ///
    /// Taken from `<title>` (or the element with `id="title"`) after the site
    /// name has been stripped. When that is blank, the Open Graph title is
    /// used, then the Twitter Cards title. Empty when none is available.
    pub title: String,

    /// Author, verbatim from `<meta name="author">` or
    /// `<meta property="author">`.
    pub byline: Option<String>,

    /// Description from the `description` meta tag, falling back to Open
    /// Graph and then Twitter Cards.
    pub excerpt: Option<String>,

    /// Declared character encoding, e.g. `"utf-8"`.
    pub charset: Option<String>,
}
