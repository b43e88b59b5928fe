//! Per-run processing: diff the fresh snapshot against the stored one, then
//! walk each new entry through fetch, sanitize/reshape, translate, publish,
//! and notify.
//!
//! External collaborators sit behind small traits so the run logic can be
//! exercised against stubs. A failure inside one entry is logged and charged
//! to that entry alone; the next entry still runs.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{error, info, instrument};
use vocnews_article::{reshape, sanitize, ArticleClient};
use vocnews_core::{Entry, FeedSnapshot};
use vocnews_feed::MongoStore;
use vocnews_telegram::{Notifier, PhotoSender};
use vocnews_telegraph::TelegraphClient;
use vocnews_translate::Translator;

/// Snapshot persistence, keyed by feed name.
#[async_trait]
pub trait SnapshotStore {
    async fn last_snapshot(&self, name: &str) -> Result<Option<FeedSnapshot>>;
    async fn save_snapshot(&self, snapshot: &FeedSnapshot) -> Result<()>;
}

/// Article body retrieval. `None` means the article could not be fetched.
#[async_trait]
pub trait ArticleSource {
    async fn fetch_article(&self, url: &str) -> Option<String>;
}

/// Translation of plain strings and HTML fragments into the run's target
/// language. `translate_html` fails open and returns the input on error.
#[async_trait]
pub trait Translate {
    async fn translate_text(&self, text: &str) -> Result<String>;
    async fn translate_html(&self, content: &str) -> String;
}

/// Mirror-page creation. Returns the public page URL.
#[async_trait]
pub trait Publish {
    async fn create_page(&self, title: &str, html_content: &str) -> Result<String>;
}

/// Recipient notification. `true` only when every recipient was reached.
#[async_trait]
pub trait Notify {
    async fn notify(&self, entry: &Entry, title: &str, summary: &str, mirror_url: &str) -> bool;
}

#[async_trait]
impl SnapshotStore for MongoStore {
    async fn last_snapshot(&self, name: &str) -> Result<Option<FeedSnapshot>> {
        Ok(MongoStore::last_snapshot(self, name).await?)
    }

    async fn save_snapshot(&self, snapshot: &FeedSnapshot) -> Result<()> {
        Ok(MongoStore::save_snapshot(self, snapshot).await?)
    }
}

#[async_trait]
impl ArticleSource for ArticleClient {
    async fn fetch_article(&self, url: &str) -> Option<String> {
        self.fetch(url).await
    }
}

/// A [`Translator`] bound to the run's language pair and prompt template.
#[derive(Debug, Clone)]
pub struct ConfiguredTranslator {
    translator: Translator,
    source_lang: String,
    target_lang: String,
}

impl ConfiguredTranslator {
    pub fn new(translator: Translator, source_lang: String, target_lang: String) -> Self {
        Self {
            translator,
            source_lang,
            target_lang,
        }
    }
}

#[async_trait]
impl Translate for ConfiguredTranslator {
    async fn translate_text(&self, text: &str) -> Result<String> {
        Ok(self
            .translator
            .translate_text(text, Some(&self.source_lang), Some(&self.target_lang))
            .await?)
    }

    async fn translate_html(&self, content: &str) -> String {
        self.translator
            .translate_html(content, Some(&self.source_lang), Some(&self.target_lang))
            .await
    }
}

#[async_trait]
impl Publish for TelegraphClient {
    async fn create_page(&self, title: &str, html_content: &str) -> Result<String> {
        Ok(TelegraphClient::create_page(self, title, html_content).await?)
    }
}

#[async_trait]
impl<S> Notify for Notifier<S>
where
    S: PhotoSender + Send + Sync,
{
    async fn notify(&self, entry: &Entry, title: &str, summary: &str, mirror_url: &str) -> bool {
        Notifier::notify(self, entry, title, summary, mirror_url).await
    }
}

/// Counts for one run, for the closing log line and for tests.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Entries the differ selected as new.
    pub new_entries: usize,
    /// Entries that got a mirror page.
    pub published: usize,
    /// Entries delivered to every recipient.
    pub notified: usize,
    /// Entries that failed somewhere, including partial delivery.
    pub failed: usize,
}

/// One run's worth of collaborators.
pub struct Pipeline<S, A, T, P, N> {
    store: S,
    articles: A,
    translator: T,
    publisher: P,
    notifier: N,
}

impl<S, A, T, P, N> Pipeline<S, A, T, P, N>
where
    S: SnapshotStore,
    A: ArticleSource,
    T: Translate,
    P: Publish,
    N: Notify,
{
    pub fn new(store: S, articles: A, translator: T, publisher: P, notifier: N) -> Self {
        Self {
            store,
            articles,
            translator,
            publisher,
            notifier,
        }
    }

    /// Processes one freshly fetched snapshot.
    ///
    /// The full snapshot is persisted as soon as new entries are identified,
    /// before any of them is processed. A retried run therefore re-notifies
    /// at most the entries of one failed batch, never the whole feed.
    #[instrument(skip(self, snapshot), fields(feed = %snapshot.name))]
    pub async fn process(&self, snapshot: &FeedSnapshot) -> Result<RunSummary> {
        let last = self.store.last_snapshot(&snapshot.name).await?;

        let Some(new_entries) = snapshot.new_entries(last.as_ref()) else {
            info!("No new entries found");
            return Ok(RunSummary::default());
        };

        info!(count = new_entries.len(), "New entries found");
        self.store.save_snapshot(snapshot).await?;

        let mut summary = RunSummary {
            new_entries: new_entries.len(),
            ..RunSummary::default()
        };

        for entry in &new_entries {
            match self.process_entry(entry).await {
                Ok(notified) => {
                    summary.published += 1;
                    if notified {
                        summary.notified += 1;
                    } else {
                        summary.failed += 1;
                    }
                }
                Err(error) => {
                    error!(link = %entry.link, %error, "Entry processing failed");
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }

    /// Runs one entry end to end and reports whether every recipient was
    /// notified.
    #[instrument(skip(self, entry), fields(link = %entry.link))]
    async fn process_entry(&self, entry: &Entry) -> Result<bool> {
        info!(published = %entry.published, title = %entry.title, "Processing entry");

        let content = self
            .articles
            .fetch_article(&entry.link)
            .await
            .context("article content could not be fetched")?;

        let cleaned = sanitize(&content)?;
        let page_ready = reshape(&cleaned)?;

        let body = self.translator.translate_html(&page_ready).await;
        let title = self.translator.translate_text(&entry.title).await?;
        let summary = self.translator.translate_text(&entry.summary).await?;

        let mirror_url = self.publisher.create_page(&title, &body).await?;
        info!(%mirror_url, "Mirror page created");

        Ok(self
            .notifier
            .notify(entry, &title, &summary, &mirror_url)
            .await)
    }
}
