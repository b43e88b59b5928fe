//! Messaging-bot delivery of published article notifications.
//!
//! [`TelegramClient`] talks to the Bot API; [`Notifier`] fans a photo-with-
//! caption message out to every configured recipient and reports whether all
//! of them received it.

pub mod caption;
pub mod client;
pub mod error;
pub mod notifier;

pub use caption::{build_caption, CAPTION_LIMIT};
pub use client::TelegramClient;
pub use error::TelegramError;
pub use notifier::{Notifier, PhotoSender};
