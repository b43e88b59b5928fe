//! Fan-out of one published article to every configured recipient.

use async_trait::async_trait;
use tracing::{debug, instrument, warn};
use vocnews_core::Entry;

use crate::caption::build_caption;
use crate::client::TelegramClient;
use crate::error::TelegramError;

/// Transport for photo-with-caption messages, one recipient at a time.
#[async_trait]
pub trait PhotoSender {
    async fn send_photo(
        &self,
        chat_id: &str,
        photo_url: &str,
        caption: &str,
    ) -> Result<(), TelegramError>;
}

#[async_trait]
impl PhotoSender for TelegramClient {
    async fn send_photo(
        &self,
        chat_id: &str,
        photo_url: &str,
        caption: &str,
    ) -> Result<(), TelegramError> {
        TelegramClient::send_photo(self, chat_id, photo_url, caption).await
    }
}

/// Sends article notifications to a fixed recipient list.
#[derive(Debug, Clone)]
pub struct Notifier<S = TelegramClient> {
    sender: S,
    recipients: Vec<String>,
}

impl<S: PhotoSender> Notifier<S> {
    pub fn new(sender: S, recipients: Vec<String>) -> Self {
        Self { sender, recipients }
    }

    /// Sends the entry's photo with a caption built from the translated title
    /// and summary plus mirror and original links.
    ///
    /// A failed send is logged and does not stop delivery to the remaining
    /// recipients; the return value is `true` only when every recipient got
    /// the message, so the caller can record a partial delivery as a failure.
    #[instrument(skip(self, entry, title, summary), fields(link = %entry.link))]
    pub async fn notify(
        &self,
        entry: &Entry,
        title: &str,
        summary: &str,
        mirror_url: &str,
    ) -> bool {
        let caption = build_caption(title, summary, mirror_url, &entry.link);

        let mut delivered = true;
        for recipient in &self.recipients {
            match self
                .sender
                .send_photo(recipient, &entry.image, &caption)
                .await
            {
                Ok(()) => debug!(%recipient, "Recipient notified"),
                Err(error) => {
                    warn!(%recipient, %error, "Failed to notify recipient");
                    delivered = false;
                }
            }
        }
        delivered
    }
}
