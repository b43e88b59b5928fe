//! Feed retrieval and snapshot persistence
//!
//! Fetches one RSS/Atom document, normalizes it into a
//! [`vocnews_core::FeedSnapshot`], and persists snapshots across runs so new
//! entries can be told apart from already-processed ones.

pub mod client;
pub mod error;
pub mod store;

pub use client::{FeedClient, DATE_FORMAT};
pub use error::FeedError;
pub use store::MongoStore;
