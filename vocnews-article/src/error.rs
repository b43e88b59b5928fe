//! Error types for article HTML processing

use thiserror::Error;

/// Errors that can occur while cleaning article HTML
#[derive(Debug, Error)]
pub enum ArticleError {
    /// Input carries no usable markup at all
    #[error("Empty or unparsable article document")]
    EmptyDocument,

    /// Cleaned document has no `<body>` to take content from
    #[error("Article document has no body")]
    MissingBody,
}
