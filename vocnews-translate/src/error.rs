//! Error types for the translation backend

use async_openai::error::OpenAIError;
use thiserror::Error;

/// Errors that can occur while requesting a translation
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Request construction or the chat completion call failed
    #[error("Chat completion failed: {0}")]
    Completion(#[from] OpenAIError),

    /// The backend answered without any message content
    #[error("Chat completion returned no content")]
    EmptyCompletion,
}
