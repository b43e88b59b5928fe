//! Environment-backed configuration, resolved once at startup.
//!
//! Required keys fail the run immediately rather than letting the process
//! limp along with an empty credential.

use std::env;

use anyhow::{bail, Context, Result};

const DEFAULT_FEED_NAME: &str = "lapresse";
const DEFAULT_FEED_URL: &str = "https://www.lapresse.ca/actualites/rss";
const DEFAULT_SOURCE_LANG: &str = "French";
const DEFAULT_TARGET_LANG: &str = "Simple Chinese";

/// Everything a run needs, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Feed identity used as the snapshot key (`FEED_NAME`).
    pub feed_name: String,
    /// Feed endpoint (`FEED_URL`), unless overridden on the command line.
    pub feed_url: String,
    /// Language articles are written in (`SOURCE_LANG`).
    pub source_lang: String,
    /// Language to translate into (`TARGET_LANG`).
    pub target_lang: String,
    /// Custom translator instruction template (`SYSTEM_PROMPT`), with
    /// `{source_lang}`/`{target_lang}` placeholders.
    pub system_prompt: Option<String>,
    /// Alternative LLM endpoint (`AI_URL`); the default OpenAI one if unset.
    pub ai_url: Option<String>,
    /// LLM credential (`AI_TOKEN`).
    pub ai_token: String,
    /// LLM model name (`AI_MODEL`).
    pub ai_model: String,
    /// Page-publishing access token (`TELEGRAPH_TOKEN`).
    pub telegraph_token: String,
    /// Messaging bot token (`TELEGRAM_BOT_TOKEN`).
    pub telegram_bot_token: String,
    /// Recipient chat ids (`TELEGRAM_CHAT_ID`, comma separated).
    pub telegram_recipients: Vec<String>,
    /// Snapshot store connection string (`MDB_CONNECT`).
    pub mongodb_uri: String,
    /// Verbose logging (`DEBUG`, case-insensitive `"true"`).
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            feed_name: optional("FEED_NAME").unwrap_or_else(|| DEFAULT_FEED_NAME.to_string()),
            feed_url: optional("FEED_URL").unwrap_or_else(|| DEFAULT_FEED_URL.to_string()),
            source_lang: optional("SOURCE_LANG").unwrap_or_else(|| DEFAULT_SOURCE_LANG.to_string()),
            target_lang: optional("TARGET_LANG").unwrap_or_else(|| DEFAULT_TARGET_LANG.to_string()),
            system_prompt: optional("SYSTEM_PROMPT"),
            ai_url: optional("AI_URL"),
            ai_token: required("AI_TOKEN")?,
            ai_model: required("AI_MODEL")?,
            telegraph_token: required("TELEGRAPH_TOKEN")?,
            telegram_bot_token: required("TELEGRAM_BOT_TOKEN")?,
            telegram_recipients: parse_recipients(&required("TELEGRAM_CHAT_ID")?),
            mongodb_uri: required("MDB_CONNECT")?,
            debug: parse_debug(optional("DEBUG").as_deref()),
        })
    }
}

fn required(key: &str) -> Result<String> {
    let value = env::var(key).with_context(|| format!("{key} is not set"))?;
    if value.trim().is_empty() {
        bail!("{key} is set but empty");
    }
    Ok(value)
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Splits a comma-separated recipient list, dropping blank segments.
fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|recipient| !recipient.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_debug(raw: Option<&str>) -> bool {
    raw.is_some_and(|value| value.trim().eq_ignore_ascii_case("true"))
}
