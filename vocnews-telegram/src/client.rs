//! Bot API client.

use reqwest::Client;
use serde_json::json;
use tracing::{debug, instrument};

use crate::error::TelegramError;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Bot API client holding one bot token. Recipients are chosen per call, so
/// a single client can serve any number of configured chats.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    client: Client,
    bot_token: String,
}

impl TelegramClient {
    pub fn new(bot_token: &str) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            bot_token: bot_token.to_string(),
        }
    }

    /// Sends a photo with an HTML-formatted caption to one chat.
    #[instrument(skip(self, caption))]
    pub async fn send_photo(
        &self,
        chat_id: &str,
        photo_url: &str,
        caption: &str,
    ) -> Result<(), TelegramError> {
        let url = format!("{}/bot{}/sendPhoto", TELEGRAM_API_BASE, self.bot_token);

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "chat_id": chat_id,
                "photo": photo_url,
                "caption": caption,
                "parse_mode": "HTML",
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TelegramError::Api(error_text));
        }

        debug!(chat_id, "Photo message sent");
        Ok(())
    }
}
