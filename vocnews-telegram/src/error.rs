//! Error types for bot messaging

use thiserror::Error;

/// Errors that can occur while sending through the bot API
#[derive(Debug, Error)]
pub enum TelegramError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Bot API returned an error
    #[error("Telegram API error: {0}")]
    Api(String),
}
