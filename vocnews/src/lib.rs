//! Wiring for the batch runner: CLI flags, environment configuration, and
//! the per-run pipeline that turns new feed entries into translated mirror
//! pages and notifications.

pub mod cli;
pub mod config;
pub mod pipeline;
