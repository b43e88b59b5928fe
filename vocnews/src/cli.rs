//! Command line flags.
//!
//! Everything here is an override; the environment remains the source of
//! truth for configuration. Unknown flags are ignored rather than rejected so
//! scheduler wrappers can pass their own switches through.

use std::path::PathBuf;

use clap::Parser;

/// vocnews - mirror and translate new feed entries
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, ignore_errors = true)]
pub struct Args {
    /// Fetch this feed URL instead of the configured one
    #[arg(long = "feed-url")]
    pub feed_url: Option<String>,

    /// Write the fetched snapshot as JSON to this file
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}
