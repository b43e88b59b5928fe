//! HTTP client for the page-publishing API.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::TelegraphError;
use crate::nodes::html_to_nodes;

const TELEGRAPH_API_BASE: &str = "https://api.telegra.ph";

/// Client for creating pages under one access token.
#[derive(Debug, Clone)]
pub struct TelegraphClient {
    client: Client,
    access_token: String,
}

#[derive(Debug, Serialize)]
struct CreatePageRequest<'a> {
    access_token: &'a str,
    title: &'a str,
    /// Content tree, pre-serialized the way the API documents it.
    content: String,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    ok: bool,
    #[serde(default)]
    result: Option<Page>,
    #[serde(default)]
    error: Option<String>,
}

/// The created page, as echoed back by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub path: String,
    pub url: String,
    pub title: String,
}

impl TelegraphClient {
    pub fn new(access_token: &str) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            access_token: access_token.to_string(),
        }
    }

    /// Publishes an HTML fragment as a new page and returns the page URL.
    #[instrument(skip(self, html_content))]
    pub async fn create_page(
        &self,
        title: &str,
        html_content: &str,
    ) -> Result<String, TelegraphError> {
        let content = serde_json::to_string(&html_to_nodes(html_content)?)?;

        let url = format!("{TELEGRAPH_API_BASE}/createPage");
        let response = self
            .client
            .post(&url)
            .json(&CreatePageRequest {
                access_token: &self.access_token,
                title,
                content,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TelegraphError::Api(format!(
                "createPage returned status {status}: {body}"
            )));
        }

        let envelope: Envelope = response.json().await?;
        if !envelope.ok {
            return Err(TelegraphError::Api(
                envelope
                    .error
                    .unwrap_or_else(|| "unspecified error".to_string()),
            ));
        }

        let page = envelope
            .result
            .ok_or_else(|| TelegraphError::Api("ok response carried no page".to_string()))?;

        debug!(url = %page.url, "Created page");
        Ok(page.url)
    }
}
