use crate::models::{Channel, Video};
use crate::store::{
    StorageBackend, StoreError, StoreResult, VideoStore, CHANNEL, CHANNEL_KEY, COLLECTIONS,
    SCHEMA_VERSION, VIDEOS,
};
use async_trait::async_trait;
use log::{debug, error, info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct StoreMeta {
    schema_version: u32,
    collections: Vec<String>,
}

#[derive(Serialize)]
struct StoredChannel<'a> {
    id: &'a str,
    #[serde(flatten)]
    channel: &'a Channel,
}

/// [`VideoStore`] over a string key/value backend.
///
/// Host layout for a store named `db`:
/// - `db:meta` schema version and collection names
/// - `db:{collection}:index` JSON array of record keys in insertion order
/// - `db:{collection}:{key}` one JSON record
pub struct LocalStore<B> {
    name: String,
    backend: B,
    ready: OnceCell<()>,
}

impl<B: StorageBackend> LocalStore<B> {
    pub fn new(name: impl Into<String>, backend: B) -> Self {
        Self {
            name: name.into(),
            backend,
            ready: OnceCell::new(),
        }
    }

    fn meta_key(&self) -> String {
        format!("{}:meta", self.name)
    }

    fn index_key(&self, collection: &str) -> String {
        format!("{}:{}:index", self.name, collection)
    }

    fn record_key(&self, collection: &str, key: &str) -> String {
        format!("{}:{}:{}", self.name, collection, key)
    }

    async fn provision(&self) -> StoreResult<()> {
        self.backend.check_available()?;

        let meta_key = self.meta_key();
        let existing = self
            .backend
            .get_item(&meta_key)
            .map_err(StoreError::StoreUnavailable)?;

        if let Some(raw) = existing {
            match serde_json::from_str::<StoreMeta>(&raw) {
                Ok(meta) if meta.schema_version == SCHEMA_VERSION => {
                    debug!("Opened store '{}' (schema v{})", self.name, meta.schema_version);
                }
                Ok(meta) => warn!(
                    "Store '{}' has schema v{}, expected v{}; using it as-is",
                    self.name, meta.schema_version, SCHEMA_VERSION
                ),
                Err(e) => warn!("Store '{}' has unreadable metadata: {}", self.name, e),
            }
            return Ok(());
        }

        for collection in COLLECTIONS {
            let index_key = self.index_key(collection);
            let has_index = self
                .backend
                .get_item(&index_key)
                .map_err(StoreError::StoreUnavailable)?
                .is_some();
            if !has_index {
                self.backend
                    .set_item(&index_key, "[]")
                    .map_err(StoreError::StoreUnavailable)?;
            }
        }

        let meta = StoreMeta {
            schema_version: SCHEMA_VERSION,
            collections: COLLECTIONS.iter().map(|c| c.to_string()).collect(),
        };
        let raw = serde_json::to_string(&meta)
            .map_err(|e| StoreError::StoreUnavailable(e.to_string()))?;
        self.backend
            .set_item(&meta_key, &raw)
            .map_err(StoreError::StoreUnavailable)?;

        info!(
            "Provisioned store '{}' with collections {:?}",
            self.name, COLLECTIONS
        );
        Ok(())
    }

    fn read_index(&self, collection: &str) -> StoreResult<Vec<String>> {
        let raw = self
            .backend
            .get_item(&self.index_key(collection))
            .map_err(|e| StoreError::read(collection, e))?;

        match raw {
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|e| StoreError::read(collection, e.to_string()))
            }
            None => Ok(Vec::new()),
        }
    }

    fn write_index(&self, collection: &str, keys: &[String]) -> StoreResult<()> {
        let raw =
            serde_json::to_string(keys).map_err(|e| StoreError::write(collection, e.to_string()))?;
        self.backend
            .set_item(&self.index_key(collection), &raw)
            .map_err(|e| StoreError::write(collection, e))
    }

    /// Writes the record and lists its key. If listing fails the record is put
    /// back the way it was, so a failed put leaves nothing behind.
    fn put_record<T: Serialize>(&self, collection: &str, key: &str, record: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(record)
            .map_err(|e| StoreError::write(collection, e.to_string()))?;
        let record_key = self.record_key(collection, key);
        let previous = self
            .backend
            .get_item(&record_key)
            .map_err(|e| StoreError::write(collection, e))?;

        self.backend
            .set_item(&record_key, &raw)
            .map_err(|e| StoreError::write(collection, e))?;

        if let Err(e) = self.add_to_index(collection, key) {
            self.restore_record(&record_key, previous.as_deref());
            return Err(e);
        }
        Ok(())
    }

    fn add_to_index(&self, collection: &str, key: &str) -> StoreResult<()> {
        let mut keys = self.read_index(collection)?;
        if !keys.iter().any(|k| k == key) {
            keys.push(key.to_string());
            self.write_index(collection, &keys)?;
        }
        Ok(())
    }

    fn restore_record(&self, record_key: &str, previous: Option<&str>) {
        let restored = match previous {
            Some(raw) => self.backend.set_item(record_key, raw),
            None => self.backend.remove_item(record_key),
        };
        match restored {
            Ok(()) => warn!("Rolled back '{}' after a failed index write", record_key),
            Err(e) => error!("Could not roll back '{}': {}", record_key, e),
        }
    }

    fn get_record<T: DeserializeOwned>(&self, collection: &str, key: &str) -> StoreResult<Option<T>> {
        let raw = self
            .backend
            .get_item(&self.record_key(collection, key))
            .map_err(|e| StoreError::read(collection, e))?;

        raw.map(|raw| {
            serde_json::from_str(&raw).map_err(|e| StoreError::read(collection, e.to_string()))
        })
        .transpose()
    }

    fn delete_record(&self, collection: &str, key: &str) -> StoreResult<()> {
        self.backend
            .remove_item(&self.record_key(collection, key))
            .map_err(|e| StoreError::write(collection, e))?;

        let mut keys = self.read_index(collection)?;
        let before = keys.len();
        keys.retain(|k| k != key);
        if keys.len() != before {
            self.write_index(collection, &keys)?;
        }
        Ok(())
    }

    /// Removes every record under the collection's prefix, listed or not, then
    /// empties the index.
    fn clear_collection(&self, collection: &str) -> StoreResult<()> {
        let prefix = format!("{}:{}:", self.name, collection);
        let index_key = self.index_key(collection);
        let keys = self
            .backend
            .keys()
            .map_err(|e| StoreError::read(collection, e))?;

        for key in keys
            .iter()
            .filter(|k| k.starts_with(&prefix) && **k != index_key)
        {
            self.backend
                .remove_item(key)
                .map_err(|e| StoreError::write(collection, e))?;
        }
        self.write_index(collection, &[])
    }
}

#[async_trait(?Send)]
impl<B: StorageBackend> VideoStore for LocalStore<B> {
    async fn open(&self) -> StoreResult<()> {
        self.ready.get_or_try_init(|| self.provision()).await?;
        Ok(())
    }

    async fn put_video(&self, video: &Video) -> StoreResult<()> {
        self.open().await?;
        self.put_record(VIDEOS, &video.id, video)?;
        debug!("Saved video '{}'", video.id);
        Ok(())
    }

    async fn get_all_videos(&self) -> StoreResult<Vec<Video>> {
        self.open().await?;

        let mut videos = Vec::new();
        for key in self.read_index(VIDEOS)? {
            match self.get_record::<Video>(VIDEOS, &key)? {
                Some(video) => videos.push(video),
                None => warn!("Video '{}' is indexed but missing; skipping", key),
            }
        }
        Ok(videos)
    }

    async fn delete_video(&self, id: &str) -> StoreResult<()> {
        self.open().await?;
        self.delete_record(VIDEOS, id)?;
        debug!("Deleted video '{}'", id);
        Ok(())
    }

    async fn put_channel(&self, channel: &Channel) -> StoreResult<()> {
        self.open().await?;
        let record = StoredChannel {
            id: CHANNEL_KEY,
            channel,
        };
        self.put_record(CHANNEL, CHANNEL_KEY, &record)
    }

    async fn get_channel(&self) -> StoreResult<Option<Channel>> {
        self.open().await?;
        self.get_record(CHANNEL, CHANNEL_KEY)
    }

    async fn clear_all(&self) -> StoreResult<()> {
        self.open().await?;

        let mut cleared: Vec<String> = Vec::new();
        for collection in COLLECTIONS {
            if let Err(e) = self.clear_collection(collection) {
                if cleared.is_empty() {
                    return Err(e);
                }
                return Err(StoreError::PartialClear {
                    cleared,
                    failed: collection.to_string(),
                    reason: e.to_string(),
                });
            }
            cleared.push(collection.to_string());
        }

        info!("Cleared all collections in store '{}'", self.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{default_channel, seed_videos};
    use crate::store::testing::FlakyBackend;
    use std::rc::Rc;

    fn video(id: &str, title: &str) -> Video {
        Video {
            id: id.to_string(),
            title: title.to_string(),
            ..seed_videos().remove(0)
        }
    }

    fn ids(videos: &[Video]) -> Vec<&str> {
        videos.iter().map(|v| v.id.as_str()).collect()
    }

    #[tokio::test]
    async fn concurrent_opens_provision_once() {
        let backend = Rc::new(FlakyBackend::new());
        let store = LocalStore::new("test", backend.clone());

        let (a, b, c) = tokio::join!(store.open(), store.open(), store.open());
        assert!(a.is_ok() && b.is_ok() && c.is_ok());
        store.open().await.unwrap();

        // a second handle over the same host storage must not re-provision
        let reopened = LocalStore::new("test", backend.clone());
        reopened.open().await.unwrap();

        assert_eq!(backend.write_count("test:meta"), 1);
        assert_eq!(backend.write_count("test:videos:index"), 1);
        assert_eq!(backend.write_count("test:channel:index"), 1);
    }

    #[tokio::test]
    async fn open_writes_schema_metadata() {
        let backend = Rc::new(FlakyBackend::new());
        let store = LocalStore::new("test", backend.clone());
        store.open().await.unwrap();

        let meta: StoreMeta = serde_json::from_str(&backend.raw("test:meta").unwrap()).unwrap();
        assert_eq!(
            meta,
            StoreMeta {
                schema_version: SCHEMA_VERSION,
                collections: vec!["videos".to_string(), "channel".to_string()],
            }
        );
    }

    #[tokio::test]
    async fn open_reports_unavailable_storage_and_retries_later() {
        let backend = Rc::new(FlakyBackend::new());
        backend.set_unavailable(true);
        let store = LocalStore::new("test", backend.clone());

        assert!(matches!(
            store.open().await,
            Err(StoreError::StoreUnavailable(_))
        ));
        assert!(matches!(
            store.get_all_videos().await,
            Err(StoreError::StoreUnavailable(_))
        ));

        backend.heal();
        assert!(store.open().await.is_ok());
        assert_eq!(store.get_all_videos().await.unwrap(), Vec::new());
    }

    #[tokio::test]
    async fn put_video_replaces_instead_of_duplicating() {
        let store = LocalStore::new("test", FlakyBackend::new());

        store.put_video(&video("x", "first")).await.unwrap();
        store.put_video(&video("x", "second")).await.unwrap();

        let videos = store.get_all_videos().await.unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].title, "second");
    }

    #[tokio::test]
    async fn get_all_videos_keeps_insertion_order() {
        let store = LocalStore::new("test", FlakyBackend::new());
        for id in ["b", "a", "c"] {
            store.put_video(&video(id, id)).await.unwrap();
        }
        store.put_video(&video("a", "edited")).await.unwrap();

        let videos = store.get_all_videos().await.unwrap();
        assert_eq!(ids(&videos), vec!["b", "a", "c"]);
        assert_eq!(videos[1].title, "edited");
    }

    #[tokio::test]
    async fn delete_missing_video_is_a_no_op() {
        let store = LocalStore::new("test", FlakyBackend::new());
        store.put_video(&video("1", "one")).await.unwrap();

        store.delete_video("nope").await.unwrap();
        assert_eq!(ids(&store.get_all_videos().await.unwrap()), vec!["1"]);

        store.delete_video("1").await.unwrap();
        store.delete_video("1").await.unwrap();
        assert!(store.get_all_videos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_video_write_is_reported() {
        let backend = Rc::new(FlakyBackend::new());
        let store = LocalStore::new("test", backend.clone());
        store.open().await.unwrap();
        backend.fail_writes_to("test:videos");

        let result = store.put_video(&video("1", "one")).await;
        assert!(matches!(
            result,
            Err(StoreError::WriteFailed { ref collection, .. }) if collection == "videos"
        ));
    }

    #[tokio::test]
    async fn failed_video_index_write_leaves_no_record() {
        let backend = Rc::new(FlakyBackend::new());
        let store = LocalStore::new("test", backend.clone());
        store.open().await.unwrap();
        backend.fail_writes_to("test:videos:index");

        assert!(store.put_video(&video("x", "lost")).await.is_err());
        assert_eq!(backend.raw("test:videos:x"), None);

        backend.heal();
        assert!(store.get_all_videos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_index_write_restores_the_replaced_record() {
        let backend = Rc::new(FlakyBackend::new());
        let store = LocalStore::new("test", backend.clone());
        store.open().await.unwrap();
        // present in host storage but missing from the index
        backend.plant("test:videos:x", r#"{"stale":true}"#);
        backend.fail_writes_to("test:videos:index");

        assert!(store.put_video(&video("x", "new")).await.is_err());
        assert_eq!(
            backend.raw("test:videos:x").as_deref(),
            Some(r#"{"stale":true}"#)
        );
    }

    #[tokio::test]
    async fn failed_channel_index_write_keeps_channel_absent() {
        let backend = Rc::new(FlakyBackend::new());
        let store = LocalStore::new("test", backend.clone());
        store.open().await.unwrap();
        backend.fail_writes_to("test:channel:index");

        let result = store.put_channel(&default_channel()).await;
        assert!(matches!(
            result,
            Err(StoreError::WriteFailed { ref collection, .. }) if collection == "channel"
        ));
        assert_eq!(store.get_channel().await.unwrap(), None);

        backend.heal();
        store.clear_all().await.unwrap();
        assert_eq!(store.get_channel().await.unwrap(), None);
    }

    #[tokio::test]
    async fn channel_is_absent_until_written() {
        let store = LocalStore::new("test", FlakyBackend::new());
        assert_eq!(store.get_channel().await.unwrap(), None);
    }

    #[tokio::test]
    async fn channel_is_a_single_record_under_the_fixed_key() {
        let backend = Rc::new(FlakyBackend::new());
        let store = LocalStore::new("test", backend.clone());

        let mut channel = default_channel();
        store.put_channel(&channel).await.unwrap();
        channel.name = "Renamed".to_string();
        channel.subscribers = 1;
        store.put_channel(&channel).await.unwrap();

        assert_eq!(store.get_channel().await.unwrap(), Some(channel));
        assert_eq!(
            backend.raw("test:channel:index").unwrap(),
            r#"["primary"]"#
        );

        let raw: serde_json::Value =
            serde_json::from_str(&backend.raw("test:channel:primary").unwrap()).unwrap();
        assert_eq!(raw["id"], "primary");
        assert_eq!(raw["name"], "Renamed");
    }

    #[tokio::test]
    async fn clear_all_empties_both_collections() {
        let store = LocalStore::new("test", FlakyBackend::new());
        for v in seed_videos() {
            store.put_video(&v).await.unwrap();
        }
        store.put_channel(&default_channel()).await.unwrap();

        store.clear_all().await.unwrap();

        assert!(store.get_all_videos().await.unwrap().is_empty());
        assert_eq!(store.get_channel().await.unwrap(), None);
    }

    #[tokio::test]
    async fn clear_all_removes_unlisted_records() {
        let backend = Rc::new(FlakyBackend::new());
        let store = LocalStore::new("test", backend.clone());
        store.put_video(&video("1", "one")).await.unwrap();

        let stray_channel = serde_json::to_string(&StoredChannel {
            id: CHANNEL_KEY,
            channel: &default_channel(),
        })
        .unwrap();
        backend.plant("test:channel:primary", &stray_channel);
        backend.plant("test:videos:orphan", "{}");
        backend.plant("other:videos:1", "{}");

        store.clear_all().await.unwrap();

        assert_eq!(store.get_channel().await.unwrap(), None);
        assert_eq!(backend.raw("test:channel:primary"), None);
        assert_eq!(backend.raw("test:videos:orphan"), None);
        assert_eq!(backend.raw("test:videos:1"), None);
        assert_eq!(backend.raw("test:videos:index").as_deref(), Some("[]"));
        assert!(backend.raw("test:meta").is_some());
        assert_eq!(backend.raw("other:videos:1").as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn clear_all_reports_partial_failure() {
        let backend = Rc::new(FlakyBackend::new());
        let store = LocalStore::new("test", backend.clone());
        store.put_video(&video("1", "one")).await.unwrap();
        store.put_channel(&default_channel()).await.unwrap();

        backend.fail_writes_to("test:channel");
        let err = store.clear_all().await.unwrap_err();

        assert_eq!(
            err,
            StoreError::PartialClear {
                cleared: vec!["videos".to_string()],
                failed: "channel".to_string(),
                reason: StoreError::write("channel", "QuotaExceededError: the quota has been exceeded")
                    .to_string(),
            }
        );
        assert!(store.get_all_videos().await.unwrap().is_empty());
        assert!(store.get_channel().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn clear_all_failing_first_collection_reports_plain_error() {
        let backend = Rc::new(FlakyBackend::new());
        let store = LocalStore::new("test", backend.clone());
        store.put_video(&video("1", "one")).await.unwrap();

        backend.fail_writes_to("test:videos");
        assert!(matches!(
            store.clear_all().await,
            Err(StoreError::WriteFailed { .. })
        ));
    }
}
