//! Core types for the vocnews pipeline
//!
//! This crate defines the feed snapshot records shared across the pipeline,
//! together with the comparison logic that decides which entries of a freshly
//! fetched snapshot have not been seen by a previous run.

pub mod snapshot;

pub use snapshot::{Entry, FeedSnapshot};
