//! Error types for page retrieval
//!
//! Extraction itself is fail-soft and never errors: missing elements yield
//! empty results. Only URL validation and the network/filesystem boundary
//! surface errors.

use thiserror::Error;

/// Errors surfaced by the retrieval facade
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Target URL failed syntactic validation, raised before any network activity
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Transport, timeout or HTTP status failure with no retry left
    #[error("request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Filesystem failure while preparing an image download folder
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
