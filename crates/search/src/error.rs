//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur at the JSON boundary.
///
/// The pure matching and ranking functions are total and never fail; only
/// decoding the app bridge's payloads can go wrong.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The catalog payload was not a valid restaurant array
    #[error("invalid catalog JSON: {0}")]
    InvalidCatalog(#[source] serde_json::Error),

    /// The filters payload was not a valid filter-state object
    #[error("invalid filters JSON: {0}")]
    InvalidFilters(#[source] serde_json::Error),

    /// The ranked result list failed to encode
    #[error("failed to encode results: {0}")]
    Encode(#[source] serde_json::Error),
}
