//! Durable storage for videos and the channel profile.
//!
//! Two collections live in the store: `videos`, keyed by `Video::id`, and
//! `channel`, which holds at most one record under [`CHANNEL_KEY`].

use crate::models::{Channel, Video};
use async_trait::async_trait;
use thiserror::Error;

pub mod backend;
pub mod local;
#[cfg(test)]
pub mod testing;

pub use backend::{StorageBackend, WebStorage};
pub use local::LocalStore;

pub const VIDEOS: &str = "videos";
pub const CHANNEL: &str = "channel";
pub const COLLECTIONS: [&str; 2] = [VIDEOS, CHANNEL];

/// Fixed key of the single channel record.
pub const CHANNEL_KEY: &str = "primary";

/// Written into the store metadata on first open.
pub const SCHEMA_VERSION: u32 = 1;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Host storage is missing or access to it was denied
    #[error("Storage unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Write to '{collection}' failed: {reason}")]
    WriteFailed { collection: String, reason: String },

    #[error("Read from '{collection}' failed: {reason}")]
    ReadFailed { collection: String, reason: String },

    /// Some collections were cleared before another one failed
    #[error("Clear stopped at '{failed}' after clearing {cleared:?}: {reason}")]
    PartialClear {
        cleared: Vec<String>,
        failed: String,
        reason: String,
    },
}

impl StoreError {
    pub fn write(collection: &str, reason: impl Into<String>) -> Self {
        StoreError::WriteFailed {
            collection: collection.to_string(),
            reason: reason.into(),
        }
    }

    pub fn read(collection: &str, reason: impl Into<String>) -> Self {
        StoreError::ReadFailed {
            collection: collection.to_string(),
            reason: reason.into(),
        }
    }
}

/// The operations the synchronizer is allowed to perform against storage.
///
/// An absent record is never an error: `get_channel` returns `None` and
/// `delete_video` on an unknown id succeeds.
#[async_trait(?Send)]
pub trait VideoStore {
    /// Provisions both collections if absent. Safe to call repeatedly and
    /// concurrently.
    async fn open(&self) -> StoreResult<()>;

    /// Inserts or replaces by `video.id`.
    async fn put_video(&self, video: &Video) -> StoreResult<()>;

    async fn get_all_videos(&self) -> StoreResult<Vec<Video>>;

    async fn delete_video(&self, id: &str) -> StoreResult<()>;

    /// Inserts or replaces the one channel record.
    async fn put_channel(&self, channel: &Channel) -> StoreResult<()>;

    async fn get_channel(&self) -> StoreResult<Option<Channel>>;

    /// Empties both collections, or reports which ones were left untouched.
    async fn clear_all(&self) -> StoreResult<()>;
}
