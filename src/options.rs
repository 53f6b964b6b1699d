//! Configuration options for metadata resolution.
//!
//! This module provides [`MetadataOptions`] and [`MetadataOptionsBuilder`].
//!
//! ## Example
//!
//! ```rust
//! use readabilityrs_metadata::{MetadataOptions, MetadataParser};
//!
//! // Using default options
//! let parser = MetadataParser::new(None).unwrap();
//!
//! // Using builder for custom options
//! let options = MetadataOptions::builder()
//!     .min_title_length(10)
//!     .fallback_charset("UTF-8")
//!     .build();
//!
//! let parser = MetadataParser::new(Some(options)).unwrap();
//! ```

use crate::constants::{DEFAULT_MAX_TITLE_LENGTH, DEFAULT_MIN_TITLE_LENGTH};
use crate::error::{MetadataError, Result};

/// Configuration options for the metadata parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataOptions {
    /// Titles with fewer characters than this are replaced by the document's
    /// only `<h1>`, when there is exactly one.
    ///
    /// Default: `15`
    pub min_title_length: usize,

    /// Titles with more characters than this are replaced by the document's
    /// only `<h1>`, when there is exactly one.
    ///
    /// Default: `150`
    pub max_title_length: usize,

    /// Encoding reported when the document declares none.
    ///
    /// Useful when the caller already knows which encoding the bytes were
    /// decoded with.
    ///
    /// Default: `None`
    pub fallback_charset: Option<String>,
}

impl Default for MetadataOptions {
    fn default() -> Self {
        Self {
            min_title_length: DEFAULT_MIN_TITLE_LENGTH,
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            fallback_charset: None,
        }
    }
}

impl MetadataOptions {
    /// Creates a new builder for MetadataOptions
    pub fn builder() -> MetadataOptionsBuilder {
        MetadataOptionsBuilder::default()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.min_title_length > self.max_title_length {
            return Err(MetadataError::InvalidOptions(format!(
                "min_title_length ({}) is greater than max_title_length ({})",
                self.min_title_length, self.max_title_length
            )));
        }
        Ok(())
    }
}

/// Builder for [`MetadataOptions`].
///
/// ```rust
/// use readabilityrs_metadata::MetadataOptions;
///
/// let options = MetadataOptions::builder()
///     .min_title_length(20)
///     .max_title_length(120)
///     .build();
/// assert_eq!(options.min_title_length, 20);
/// ```
#[derive(Default)]
pub struct MetadataOptionsBuilder {
    min_title_length: Option<usize>,
    max_title_length: Option<usize>,
    fallback_charset: Option<String>,
}

impl MetadataOptionsBuilder {
    /// Set the short-title threshold
    pub fn min_title_length(mut self, length: usize) -> Self {
        self.min_title_length = Some(length);
        self
    }

    /// Set the long-title threshold
    pub fn max_title_length(mut self, length: usize) -> Self {
        self.max_title_length = Some(length);
        self
    }

    /// Set the charset reported for documents without a declaration
    pub fn fallback_charset(mut self, charset: impl Into<String>) -> Self {
        self.fallback_charset = Some(charset.into());
        self
    }

    /// Build the MetadataOptions
    pub fn build(self) -> MetadataOptions {
        let defaults = MetadataOptions::default();
        MetadataOptions {
            min_title_length: self.min_title_length.unwrap_or(defaults.min_title_length),
            max_title_length: self.max_title_length.unwrap_or(defaults.max_title_length),
            fallback_charset: self.fallback_charset.or(defaults.fallback_charset),
        }
    }
}
