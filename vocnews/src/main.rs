//! vocnews batch runner
//!
//! One invocation fetches the configured feed, mirrors and translates every
//! entry newer than the stored snapshot, and notifies the configured chats.
//! Scheduling is the caller's job (cron or similar); a non-zero exit means
//! the run as a whole failed and should be retried by the scheduler.

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vocnews::cli::Args;
use vocnews::config::Config;
use vocnews::pipeline::{ConfiguredTranslator, Pipeline};
use vocnews_article::ArticleClient;
use vocnews_feed::{FeedClient, MongoStore};
use vocnews_telegram::{Notifier, TelegramClient};
use vocnews_telegraph::TelegraphClient;
use vocnews_translate::Translator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from a .env file when one is present
    if let Err(e) = dotenvy::dotenv() {
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env: {}", e);
        }
    }

    let args = Args::parse();
    let config = Config::from_env()?;

    // Initialize logging; DEBUG=true raises the default level
    let default_filter = if config.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    info!(feed = %config.feed_name, "Starting vocnews run");

    let feed_url = args.feed_url.as_deref().unwrap_or(&config.feed_url);
    let snapshot = FeedClient::new().fetch(&config.feed_name, feed_url).await?;

    if let Some(path) = &args.output {
        std::fs::write(path, serde_json::to_string_pretty(&snapshot)?)?;
        debug!(path = %path.display(), "Snapshot written");
    }

    let store = MongoStore::connect(&config.mongodb_uri).await?;

    let mut translator = Translator::new(config.ai_url.as_deref(), &config.ai_token, &config.ai_model);
    if let Some(template) = &config.system_prompt {
        translator = translator.with_template(template.as_str());
    }

    let pipeline = Pipeline::new(
        store,
        ArticleClient::new(),
        ConfiguredTranslator::new(translator, config.source_lang, config.target_lang),
        TelegraphClient::new(&config.telegraph_token),
        Notifier::new(
            TelegramClient::new(&config.telegram_bot_token),
            config.telegram_recipients,
        ),
    );

    let summary = pipeline.process(&snapshot).await?;
    info!(
        new = summary.new_entries,
        published = summary.published,
        notified = summary.notified,
        failed = summary.failed,
        "Run complete"
    );

    Ok(())
}
