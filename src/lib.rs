//! # ReadabilityRS Metadata
//!
//! Article metadata resolution for Readability-style content extraction.
//!
//! Given a document already parsed by [`scraper`], this crate resolves the
//! article's title, byline, excerpt and character encoding. It is the stage
//! that runs before main-content extraction in a Readability pipeline.
//!
//! ## Key Features
//!
//! - **Meta Tag Scanning**: Reads plain, Open Graph and Twitter Cards `<meta>`
//!   tags and resolves conflicts between them
//! - **Title Cleanup**: Strips site names and breadcrumbs from `<title>` while
//!   guarding against over-truncation
//! - **Encoding Lookup**: Reports the charset declared by the document
//! - **Read-only**: The document tree is never modified
//!
//! ## Basic Usage
//!
//! ```rust
//! use readabilityrs_metadata::MetadataParser;
//!
//! let html = r#"<html><head>
//!     <title>How We Rebuilt Our Search Engine | Example Blog</title>
//!     <meta name="author" content="Jane Smith">
//!     <meta property="og:description" content="A look at the new indexer.">
//! </head><body></body></html>"#;
//!
//! let parser = MetadataParser::new(None).unwrap();
//! let metadata = parser.parse_str(html);
//!
//! assert_eq!(metadata.title, "How We Rebuilt Our Search Engine");
//! assert_eq!(metadata.byline.as_deref(), Some("Jane Smith"));
//! assert_eq!(metadata.excerpt.as_deref(), Some("A look at the new indexer."));
//! ```
//!
//! ## Title Heuristics
//!
//! The individual cleanup steps are public, which helps when tuning or
//! debugging a particular page:
//!
//! ```rust
//! use readabilityrs_metadata::title::{rollback_if_over_truncated, strip_separator_segment};
//!
//! let split = strip_separator_segment("Article Title - Site Name").unwrap();
//! assert_eq!(split.title.trim(), "Article Title");
//!
//! // Two words is too short to trust, so the full title comes back.
//! let resolved = rollback_if_over_truncated(&split.title, "Article Title - Site Name", split.hierarchical);
//! assert_eq!(resolved, "Article Title - Site Name");
//! ```
//!
//! ## Logging
//!
//! Decisions taken by the heuristics are emitted as [`tracing`] events at
//! `debug` and `trace` level. Install any subscriber to see them.

mod article;
mod constants;
mod document;
mod error;
mod meta_tags;
mod metadata;
mod options;
mod parser;
pub mod title;
mod utils;

// Public exports
pub use article::ArticleMetadata;
pub use error::{MetadataError, Result};
pub use meta_tags::{normalize_key, MetaTags};
pub use metadata::{get_article_metadata, get_meta_tags};
pub use options::{MetadataOptions, MetadataOptionsBuilder};
pub use parser::MetadataParser;
pub use title::get_article_title;
pub use utils::word_count;
