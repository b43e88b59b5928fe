//! Error types for feed fetching and snapshot persistence

use thiserror::Error;

/// Errors that can occur while fetching, parsing, or persisting a feed
#[derive(Debug, Error)]
pub enum FeedError {
    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Feed endpoint answered with a non-success status
    #[error("Feed endpoint returned status {status}: {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested feed URL
        url: String,
    },

    /// Document is neither a readable RSS channel nor an Atom feed
    #[error("Unrecognized feed document: {0}")]
    Parse(String),

    /// A feed item is missing a required field or carries a bad value
    #[error("Malformed feed item {index}: {reason}")]
    Item {
        /// Zero-based position of the item in the feed
        index: usize,
        /// What was wrong with it
        reason: String,
    },

    /// Feed URL did not parse
    #[error("Invalid feed URL: {0}")]
    Url(#[from] url::ParseError),

    /// Snapshot store operation failed
    #[error("Snapshot store error: {0}")]
    Database(#[from] mongodb::error::Error),
}
