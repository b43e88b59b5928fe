//! Error types for page publishing

use thiserror::Error;

/// Errors that can occur while converting content or creating a page
#[derive(Debug, Error)]
pub enum TelegraphError {
    /// HTTP request failed
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The page API refused the request or answered with an error envelope
    #[error("Telegraph API error: {0}")]
    Api(String),

    /// Content used a tag outside the page vocabulary
    #[error("Tag <{0}> is not allowed in page content")]
    NotAllowedTag(String),

    /// Content tree could not be serialized for the wire
    #[error("Node serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
