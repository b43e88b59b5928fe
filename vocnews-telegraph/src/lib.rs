//! Publishing of prepared article HTML as standalone Telegraph pages.
//!
//! The page API does not take raw HTML; content travels as a JSON tree over a
//! restricted tag vocabulary. [`nodes`] converts a reshaped fragment into that
//! tree and [`TelegraphClient`] submits it.

pub mod client;
pub mod error;
pub mod nodes;

pub use client::TelegraphClient;
pub use error::TelegraphError;
pub use nodes::{html_to_nodes, Node, NodeElement};
