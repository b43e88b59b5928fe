//! Feed client
//!
//! Fetches one feed document and normalizes it into a [`FeedSnapshot`].
//! Parsing is strict: a single malformed item fails the whole fetch, so a
//! snapshot never carries partial results.

use std::time::Duration;

use chrono::DateTime;
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use vocnews_core::{Entry, FeedSnapshot};

use crate::error::FeedError;

/// RFC-822-style publish date layout used by RSS items,
/// e.g. `Sat, 23 Nov 2024 14:13:45 -0500`
pub const DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

const USER_AGENT: &str = "Mozilla/5.0 (compatible; vocnews/0.1)";

/// Feed fetch client
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    /// Fetch the feed at `url` and normalize it into a snapshot named `name`.
    #[instrument(skip(self))]
    pub async fn fetch(&self, name: &str, url: &str) -> Result<FeedSnapshot, FeedError> {
        let url = Url::parse(url)?;

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FeedError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FeedError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FeedError::RequestFailed(e.to_string()))?;

        let entries = parse_feed(&body)?;
        debug!(entries = entries.len(), "parsed feed document");

        Ok(FeedSnapshot::new(name, url.as_str(), entries))
    }
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the raw document, trying RSS first and falling back to Atom.
fn parse_feed(body: &[u8]) -> Result<Vec<Entry>, FeedError> {
    if let Ok(channel) = rss::Channel::read_from(body) {
        return parse_rss_channel(&channel);
    }

    match atom_syndication::Feed::read_from(body) {
        Ok(feed) => parse_atom_feed(&feed),
        Err(e) => Err(FeedError::Parse(e.to_string())),
    }
}

fn parse_rss_channel(channel: &rss::Channel) -> Result<Vec<Entry>, FeedError> {
    channel
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let title = item
                .title()
                .ok_or_else(|| item_error(index, "missing title"))?
                .to_string();
            let link = item
                .link()
                .ok_or_else(|| item_error(index, "missing link"))?
                .to_string();

            let pub_date = item
                .pub_date()
                .ok_or_else(|| item_error(index, "missing publish date"))?;
            let published = DateTime::parse_from_str(pub_date, DATE_FORMAT)
                .map_err(|e| item_error(index, format!("publish date {pub_date:?}: {e}")))?;

            let summary = strip_html(item.description().unwrap_or_default());
            let image = item
                .enclosure()
                .filter(|enclosure| enclosure.mime_type().starts_with("image/"))
                .map(|enclosure| enclosure.url().to_string())
                .or_else(|| media_image(item))
                .unwrap_or_else(|| link.clone());

            Ok(Entry {
                title,
                published,
                summary,
                link,
                image,
            })
        })
        .collect()
}

fn parse_atom_feed(feed: &atom_syndication::Feed) -> Result<Vec<Entry>, FeedError> {
    feed.entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let title = entry.title().to_string();
            if title.is_empty() {
                return Err(item_error(index, "missing title"));
            }
            let link = entry
                .links()
                .first()
                .map(|l| l.href().to_string())
                .ok_or_else(|| item_error(index, "missing link"))?;

            // Atom dates are already typed; prefer published, else updated.
            let published = entry.published().copied().unwrap_or_else(|| *entry.updated());

            let summary = strip_html(entry.summary().map(|s| s.as_str()).unwrap_or_default());
            let image = entry
                .links()
                .iter()
                .find(|l| l.rel() == "enclosure")
                .map(|l| l.href().to_string())
                .unwrap_or_else(|| link.clone());

            Ok(Entry {
                title,
                published,
                summary,
                link,
                image,
            })
        })
        .collect()
}

/// Image URL from RSS `media:content` / `media:thumbnail` extensions.
fn media_image(item: &rss::Item) -> Option<String> {
    let media = item.extensions().get("media")?;

    for key in ["content", "thumbnail"] {
        for extension in media.get(key).into_iter().flatten() {
            if let Some(url) = extension.attrs().get("url") {
                let medium = extension.attrs().get("medium").map(String::as_str);
                let mime = extension.attrs().get("type").map(String::as_str);

                if key == "thumbnail"
                    || medium == Some("image")
                    || mime.map_or(false, |m| m.starts_with("image/"))
                {
                    return Some(url.clone());
                }
            }
        }
    }

    None
}

/// Strip tags and decode entities from feed description HTML so summaries
/// are plain text.
fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    html_escape::decode_html_entities(&text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn item_error(index: usize, reason: impl Into<String>) -> FeedError {
    FeedError::Item {
        index,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rss_document(items: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:media="http://search.yahoo.com/mrss/">
  <channel>
    <title>Actualités</title>
    <link>https://news.example.com</link>
    <description>Fil de nouvelles</description>
    {items}
  </channel>
</rss>"#
        )
    }

    #[test]
    fn parses_rss_items_into_entries() {
        let xml = rss_document(
            r#"<item>
                 <title>Première manchette</title>
                 <link>https://news.example.com/a</link>
                 <description>&lt;p&gt;Un &lt;b&gt;résumé&lt;/b&gt;&amp;nbsp;court&lt;/p&gt;</description>
                 <pubDate>Sat, 23 Nov 2024 14:13:45 -0500</pubDate>
                 <enclosure url="https://news.example.com/a.jpg" type="image/jpeg" length="0"/>
               </item>"#,
        );

        let channel = rss::Channel::read_from(xml.as_bytes()).unwrap();
        let entries = parse_rss_channel(&channel).unwrap();

        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.title, "Première manchette");
        assert_eq!(entry.link, "https://news.example.com/a");
        assert_eq!(entry.summary, "Un résumé court");
        assert_eq!(entry.image, "https://news.example.com/a.jpg");
        assert_eq!(entry.published.to_rfc3339(), "2024-11-23T14:13:45-05:00");
    }

    #[test]
    fn image_falls_back_to_entry_link() {
        let xml = rss_document(
            r#"<item>
                 <title>Sans image</title>
                 <link>https://news.example.com/b</link>
                 <pubDate>Sat, 23 Nov 2024 10:00:00 -0500</pubDate>
               </item>"#,
        );

        let channel = rss::Channel::read_from(xml.as_bytes()).unwrap();
        let entries = parse_rss_channel(&channel).unwrap();

        assert_eq!(entries[0].image, "https://news.example.com/b");
    }

    #[test]
    fn media_thumbnail_beats_link_fallback() {
        let xml = rss_document(
            r#"<item>
                 <title>Vignette</title>
                 <link>https://news.example.com/c</link>
                 <pubDate>Sat, 23 Nov 2024 11:00:00 -0500</pubDate>
                 <media:thumbnail url="https://img.example.com/c-thumb.jpg"/>
               </item>"#,
        );

        let channel = rss::Channel::read_from(xml.as_bytes()).unwrap();
        let entries = parse_rss_channel(&channel).unwrap();

        assert_eq!(entries[0].image, "https://img.example.com/c-thumb.jpg");
    }

    #[test]
    fn missing_publish_date_fails_the_fetch() {
        let xml = rss_document(
            r#"<item>
                 <title>Sans date</title>
                 <link>https://news.example.com/d</link>
               </item>"#,
        );

        let channel = rss::Channel::read_from(xml.as_bytes()).unwrap();
        let err = parse_rss_channel(&channel).unwrap_err();

        assert!(matches!(err, FeedError::Item { index: 0, .. }));
    }

    #[test]
    fn unexpected_date_layout_fails_the_fetch() {
        let xml = rss_document(
            r#"<item>
                 <title>Date ISO</title>
                 <link>https://news.example.com/e</link>
                 <pubDate>2024-11-23T14:13:45-05:00</pubDate>
               </item>"#,
        );

        let channel = rss::Channel::read_from(xml.as_bytes()).unwrap();
        assert!(parse_rss_channel(&channel).is_err());
    }

    #[test]
    fn atom_document_is_accepted() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Actualités</title>
  <id>urn:example:feed</id>
  <updated>2024-11-23T14:13:45-05:00</updated>
  <entry>
    <title>Entrée Atom</title>
    <id>urn:example:1</id>
    <link href="https://news.example.com/f"/>
    <link rel="enclosure" href="https://news.example.com/f.jpg"/>
    <updated>2024-11-23T14:13:45-05:00</updated>
    <published>2024-11-23T12:00:00-05:00</published>
    <summary>Résumé Atom</summary>
  </entry>
</feed>"#;

        let entries = parse_feed(xml.as_bytes()).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Entrée Atom");
        assert_eq!(entries[0].image, "https://news.example.com/f.jpg");
        assert_eq!(entries[0].published.to_rfc3339(), "2024-11-23T12:00:00-05:00");
    }

    #[test]
    fn garbage_document_is_a_parse_error() {
        let err = parse_feed(b"not a feed at all").unwrap_err();
        assert!(matches!(err, FeedError::Parse(_)));
    }

    #[test]
    fn strip_html_flattens_markup_and_entities() {
        assert_eq!(
            strip_html("<p>Hello <b>world</b>&nbsp;&amp; beyond</p>"),
            "Hello world & beyond"
        );
    }
}
