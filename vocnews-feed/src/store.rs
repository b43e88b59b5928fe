//! MongoDB-backed snapshot store
//!
//! One document per feed name, replaced wholesale on every save. Reads and
//! writes are not coordinated across processes: two runs hitting the same
//! feed name race between `last_snapshot` and `save_snapshot`, which is
//! tolerated because a single external scheduler invokes the job at a time.

use mongodb::{bson::doc, Client, Collection};
use tracing::{debug, info, instrument};

use vocnews_core::FeedSnapshot;

use crate::error::FeedError;

const DATABASE: &str = "vocnews";
const COLLECTION: &str = "rss";

/// Persistent store of the most recently fetched snapshot per feed
pub struct MongoStore {
    snapshots: Collection<FeedSnapshot>,
}

impl MongoStore {
    /// Connect with a MongoDB connection string.
    pub async fn connect(uri: &str) -> Result<Self, FeedError> {
        let client = Client::with_uri_str(uri).await?;
        let snapshots = client.database(DATABASE).collection(COLLECTION);

        info!(
            database = DATABASE,
            collection = COLLECTION,
            "snapshot store ready"
        );

        Ok(Self { snapshots })
    }

    /// Last persisted snapshot for `name`.
    ///
    /// `Ok(None)` means no snapshot has ever been saved under that name (the
    /// first run), which is a normal state, not an error.
    #[instrument(skip(self))]
    pub async fn last_snapshot(&self, name: &str) -> Result<Option<FeedSnapshot>, FeedError> {
        let found = self.snapshots.find_one(doc! { "name": name }).await?;

        match &found {
            Some(snapshot) => debug!(entries = snapshot.entries.len(), "loaded previous snapshot"),
            None => debug!("no previous snapshot"),
        }

        Ok(found)
    }

    /// Replace the persisted snapshot for this feed name, inserting it if
    /// none exists yet.
    #[instrument(skip(self, snapshot), fields(name = %snapshot.name))]
    pub async fn save_snapshot(&self, snapshot: &FeedSnapshot) -> Result<(), FeedError> {
        self.snapshots
            .replace_one(doc! { "name": &snapshot.name }, snapshot)
            .upsert(true)
            .await?;

        debug!(entries = snapshot.entries.len(), "snapshot saved");
        Ok(())
    }
}
