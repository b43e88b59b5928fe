//! Feed snapshot records and new-entry detection

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One article reference from a feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Article title as published by the feed
    pub title: String,
    /// Publish timestamp, timezone-aware (serialized as ISO-8601)
    pub published: DateTime<FixedOffset>,
    /// Plain-text summary/excerpt
    pub summary: String,
    /// URL of the article page
    pub link: String,
    /// URL of the primary image
    pub image: String,
}

/// The full set of entries retrieved from a feed at one point in time
///
/// One snapshot exists per tracked feed name. It is persisted wholesale after
/// every run that found new entries; it is never partially updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedSnapshot {
    /// Feed identity, keys the persisted document
    pub name: String,
    /// Feed endpoint the snapshot was fetched from
    pub url: String,
    /// Entries in the order the feed declared them
    pub entries: Vec<Entry>,
}

impl FeedSnapshot {
    pub fn new(name: impl Into<String>, url: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            entries,
        }
    }

    /// Most-recent entry by publish timestamp, or `None` for an empty
    /// snapshot. Ties resolve to the entry declared later in the feed.
    pub fn latest_entry(&self) -> Option<&Entry> {
        self.entries.iter().max_by_key(|entry| entry.published)
    }

    /// Entries of `self` that are newer than the last persisted snapshot.
    ///
    /// The comparison floor is `last`'s most-recent entry; an absent or empty
    /// `last` means no floor, which selects every entry. Selection keeps the
    /// feed's original order and requires `published` strictly greater than
    /// the floor, so an entry publishing in the same instant as the floor is
    /// not selected, and a feed that republishes old items with bumped
    /// timestamps gets them selected again. Returns `None` when nothing
    /// qualified; a returned list is never empty.
    pub fn new_entries(&self, last: Option<&FeedSnapshot>) -> Option<Vec<Entry>> {
        let floor = last
            .and_then(FeedSnapshot::latest_entry)
            .map(|entry| entry.published);

        let selected: Vec<Entry> = self
            .entries
            .iter()
            .filter(|entry| floor.map_or(true, |floor| entry.published > floor))
            .cloned()
            .collect();

        if selected.is_empty() {
            None
        } else {
            Some(selected)
        }
    }
}
