//! Article page fetching

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument, warn};

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Client for fetching raw article pages
pub struct ArticleClient {
    client: Client,
}

impl ArticleClient {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    /// Fetch the article page at `url`.
    ///
    /// Network failure and non-success statuses both mean the content is
    /// unavailable and yield `None`, so the caller can skip the entry
    /// without aborting the run.
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("article request failed: {e}");
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(status = %response.status(), "article fetch refused");
            return None;
        }

        match response.text().await {
            Ok(body) => {
                debug!(bytes = body.len(), "fetched article page");
                Some(body)
            }
            Err(e) => {
                warn!("article body read failed: {e}");
                None
            }
        }
    }
}

impl Default for ArticleClient {
    fn default() -> Self {
        Self::new()
    }
}
