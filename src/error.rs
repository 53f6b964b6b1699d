//! Error types for the metadata library.

use thiserror::Error;

/// Result type alias for metadata operations
pub type Result<T> = std::result::Result<T, MetadataError>;

/// Errors that can occur while configuring or querying a document.
///
/// Extraction itself never fails; these only surface from configuration and
/// from internal tree queries, which the resolvers turn into absent values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    /// A CSS selector could not be compiled
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// Options are inconsistent with each other
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}
