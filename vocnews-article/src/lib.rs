//! Article content retrieval and HTML cleanup
//!
//! Turns an arbitrary news article page into markup a restricted publishing
//! target accepts, in two independent stages: [`sanitize`] removes hostile
//! and chrome markup from the raw page, [`reshape`] projects the cleaned
//! document onto the target's small tag vocabulary.

pub mod error;
pub mod fetch;
mod render;
pub mod reshape;
pub mod sanitize;

pub use error::ArticleError;
pub use fetch::ArticleClient;
pub use reshape::reshape;
pub use sanitize::sanitize;
