//! Owner of the in-memory [`AppSnapshot`].
//!
//! Every read and write between the render layer and the store goes through
//! [`Synchronizer`]. Each change publishes a new `Rc<AppSnapshot>`; a snapshot
//! handed out earlier is never modified, so readers see either the old state
//! or the new one.

use crate::auth::Credentials;
use crate::models::{AppSnapshot, Channel, Theme, Video};
use crate::seed::{default_channel, seed_videos};
use crate::store::{StoreResult, VideoStore};
use log::{error, info};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub struct Synchronizer<S> {
    store: S,
    snapshot: RefCell<Rc<AppSnapshot>>,
    ready: Cell<bool>,
}

impl<S: VideoStore> Synchronizer<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            snapshot: RefCell::new(Rc::new(AppSnapshot::default())),
            ready: Cell::new(false),
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> Rc<AppSnapshot> {
        self.snapshot.borrow().clone()
    }

    /// Whether an initial load has completed since start or the last reset.
    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    pub fn is_admin(&self) -> bool {
        self.snapshot.borrow().settings.is_admin
    }

    fn publish(&self, apply: impl FnOnce(&mut AppSnapshot)) -> Rc<AppSnapshot> {
        let mut next = AppSnapshot::clone(&self.snapshot.borrow());
        apply(&mut next);
        let next = Rc::new(next);
        *self.snapshot.borrow_mut() = next.clone();
        next
    }

    /// Reads both collections, seeds whichever is empty, then publishes the
    /// result. Seeded content is trusted without a re-read.
    pub async fn load_initial(&self) -> StoreResult<Rc<AppSnapshot>> {
        let mut videos = self.store.get_all_videos().await?;
        let stored_channel = self.store.get_channel().await?;

        if videos.is_empty() {
            let seeds = seed_videos();
            info!("No videos stored; seeding {} defaults", seeds.len());
            for video in &seeds {
                self.store.put_video(video).await?;
            }
            videos = seeds;
        }

        let channel = match stored_channel {
            Some(channel) => channel,
            None => {
                info!("No channel stored; writing default channel");
                let channel = default_channel();
                self.store.put_channel(&channel).await?;
                channel
            }
        };

        let snapshot = self.publish(move |s| {
            s.videos = videos;
            s.channel = channel;
        });
        self.ready.set(true);
        info!("Loaded {} videos", snapshot.videos.len());
        Ok(snapshot)
    }

    /// Writes the replacement channel, then echoes it locally. A failed write
    /// leaves the snapshot as it was.
    pub async fn update_channel(&self, channel: Channel) -> StoreResult<()> {
        if let Err(e) = self.store.put_channel(&channel).await {
            error!("Failed to save channel: {}", e);
            return Err(e);
        }
        self.publish(move |s| s.channel = channel);
        Ok(())
    }

    /// Replaces the snapshot's video list with what the store holds now.
    pub async fn refresh_videos(&self) -> StoreResult<Vec<Video>> {
        let videos = self.store.get_all_videos().await?;
        let snapshot = self.publish(|s| s.videos = videos);
        Ok(snapshot.videos.clone())
    }

    pub async fn save_video(&self, video: &Video) -> StoreResult<Vec<Video>> {
        if let Err(e) = self.store.put_video(video).await {
            error!("Failed to save video '{}': {}", video.id, e);
            return Err(e);
        }
        self.refresh_videos().await
    }

    pub async fn delete_video(&self, id: &str) -> StoreResult<Vec<Video>> {
        if let Err(e) = self.store.delete_video(id).await {
            error!("Failed to delete video '{}': {}", id, e);
            return Err(e);
        }
        self.refresh_videos().await
    }

    pub fn set_admin(&self, is_admin: bool) {
        self.publish(|s| s.settings.is_admin = is_admin);
    }

    /// Turns on admin mode when the pair matches.
    pub fn sign_in(&self, credentials: &Credentials, email: &str, password: &str) -> bool {
        let ok = credentials.verify(email, password);
        if ok {
            self.set_admin(true);
            info!("Admin signed in");
        }
        ok
    }

    pub fn sign_out(&self) {
        self.set_admin(false);
        info!("Admin signed out");
    }

    /// Session-only, like the admin flag.
    pub fn toggle_theme(&self) -> Theme {
        self.publish(|s| s.settings.theme = s.settings.theme.toggled())
            .settings
            .theme
    }

    /// Wipes the store and rebuilds the snapshot as a fresh start would:
    /// defaults first, then the full initial load (which re-seeds).
    pub async fn factory_reset(&self) -> StoreResult<Rc<AppSnapshot>> {
        self.store.clear_all().await?;
        info!("Store cleared; reloading from empty");

        self.ready.set(false);
        *self.snapshot.borrow_mut() = Rc::new(AppSnapshot::default());
        self.load_initial().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::FlakyBackend;
    use crate::store::{LocalStore, StoreError};

    type TestSync = Synchronizer<LocalStore<Rc<FlakyBackend>>>;

    fn setup() -> (TestSync, Rc<FlakyBackend>) {
        let backend = Rc::new(FlakyBackend::new());
        let sync = Synchronizer::new(LocalStore::new("test", backend.clone()));
        (sync, backend)
    }

    fn video(id: &str, title: &str) -> Video {
        Video {
            id: id.to_string(),
            title: title.to_string(),
            ..seed_videos().remove(1)
        }
    }

    fn ids(videos: &[Video]) -> Vec<&str> {
        videos.iter().map(|v| v.id.as_str()).collect()
    }

    #[tokio::test]
    async fn load_initial_seeds_an_empty_store() {
        let (sync, _) = setup();
        assert!(!sync.is_ready());

        let snapshot = sync.load_initial().await.unwrap();

        assert!(sync.is_ready());
        assert_eq!(snapshot.videos, seed_videos());
        assert_eq!(snapshot.channel, default_channel());
        assert!(!snapshot.settings.is_admin);
        assert_eq!(sync.store().get_all_videos().await.unwrap(), seed_videos());
        assert_eq!(
            sync.store().get_channel().await.unwrap(),
            Some(default_channel())
        );
    }

    #[tokio::test]
    async fn load_initial_leaves_existing_content_alone() {
        let (sync, _) = setup();
        let mut channel = default_channel();
        channel.name = "Existing".to_string();
        sync.store().put_video(&video("9", "mine")).await.unwrap();
        sync.store().put_channel(&channel).await.unwrap();

        let snapshot = sync.load_initial().await.unwrap();

        assert_eq!(ids(&snapshot.videos), vec!["9"]);
        assert_eq!(snapshot.channel, channel);
        assert_eq!(ids(&sync.store().get_all_videos().await.unwrap()), vec!["9"]);
    }

    #[tokio::test]
    async fn load_initial_seeds_each_collection_independently() {
        let (sync, _) = setup();
        let mut channel = default_channel();
        channel.handle = "@kept".to_string();
        sync.store().put_channel(&channel).await.unwrap();

        let snapshot = sync.load_initial().await.unwrap();

        assert_eq!(ids(&snapshot.videos), vec!["1", "2"]);
        assert_eq!(snapshot.channel.handle, "@kept");
    }

    #[tokio::test]
    async fn load_initial_surfaces_unavailable_storage() {
        let (sync, backend) = setup();
        backend.set_unavailable(true);

        let err = sync.load_initial().await.unwrap_err();

        assert!(matches!(err, StoreError::StoreUnavailable(_)));
        assert!(!sync.is_ready());
        assert_eq!(*sync.snapshot(), AppSnapshot::default());
    }

    #[tokio::test]
    async fn failed_video_seeding_publishes_nothing() {
        let (sync, backend) = setup();
        sync.store().open().await.unwrap();
        backend.fail_writes_to("test:videos");

        let err = sync.load_initial().await.unwrap_err();

        assert!(matches!(
            err,
            StoreError::WriteFailed { ref collection, .. } if collection == "videos"
        ));
        assert!(!sync.is_ready());
        assert_eq!(*sync.snapshot(), AppSnapshot::default());
    }

    #[tokio::test]
    async fn failed_channel_seeding_publishes_nothing() {
        let (sync, backend) = setup();
        sync.store().open().await.unwrap();
        backend.fail_writes_to("test:channel");

        let err = sync.load_initial().await.unwrap_err();

        assert!(matches!(
            err,
            StoreError::WriteFailed { ref collection, .. } if collection == "channel"
        ));
        assert!(!sync.is_ready());
        assert_eq!(*sync.snapshot(), AppSnapshot::default());
        assert_eq!(sync.store().get_channel().await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_channel_echoes_after_write() {
        let (sync, _) = setup();
        sync.load_initial().await.unwrap();

        let mut first = default_channel();
        first.name = "First".to_string();
        let mut second = default_channel();
        second.name = "Second".to_string();
        second.subscribers = 99;

        sync.update_channel(first).await.unwrap();
        sync.update_channel(second.clone()).await.unwrap();

        assert_eq!(sync.snapshot().channel, second);
        assert_eq!(sync.store().get_channel().await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn failed_channel_write_leaves_snapshot_untouched() {
        let (sync, backend) = setup();
        sync.load_initial().await.unwrap();
        let before = sync.snapshot();

        backend.fail_writes_to("test:channel");
        let mut changed = default_channel();
        changed.name = "Never saved".to_string();
        let result = sync.update_channel(changed).await;

        assert!(matches!(result, Err(StoreError::WriteFailed { .. })));
        assert_eq!(sync.snapshot().channel, before.channel);
        assert!(Rc::ptr_eq(&before, &sync.snapshot()));
        assert_eq!(
            sync.store().get_channel().await.unwrap(),
            Some(default_channel())
        );
    }

    #[tokio::test]
    async fn failed_video_write_leaves_snapshot_untouched() {
        let (sync, backend) = setup();
        sync.load_initial().await.unwrap();

        backend.fail_writes_to("test:videos");
        assert!(sync.save_video(&video("3", "three")).await.is_err());
        assert!(sync.delete_video("1").await.is_err());

        assert_eq!(ids(&sync.snapshot().videos), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn earlier_snapshots_are_not_live_views() {
        let (sync, _) = setup();
        let loaded = sync.load_initial().await.unwrap();

        sync.save_video(&video("3", "three")).await.unwrap();

        assert_eq!(loaded.videos.len(), 2);
        assert_eq!(sync.snapshot().videos.len(), 3);
    }

    #[tokio::test]
    async fn refresh_videos_reflects_store_contents() {
        let (sync, _) = setup();
        sync.load_initial().await.unwrap();

        // written behind the synchronizer's back
        sync.store().put_video(&video("7", "seven")).await.unwrap();
        assert_eq!(sync.snapshot().videos.len(), 2);

        let videos = sync.refresh_videos().await.unwrap();
        assert_eq!(ids(&videos), vec!["1", "2", "7"]);
        assert_eq!(sync.snapshot().videos, videos);
    }

    #[tokio::test]
    async fn deleting_unknown_video_changes_nothing() {
        let (sync, _) = setup();
        sync.load_initial().await.unwrap();

        let videos = sync.delete_video("missing").await.unwrap();
        assert_eq!(ids(&videos), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn session_flags_are_memory_only() {
        let (sync, backend) = setup();
        sync.load_initial().await.unwrap();
        let creds = Credentials::new("admin@example.com", "secret");

        assert!(!sync.sign_in(&creds, "admin@example.com", "wrong"));
        assert!(!sync.is_admin());

        assert!(sync.sign_in(&creds, "admin@example.com", "secret"));
        assert!(sync.is_admin());
        assert!(sync.snapshot().settings.is_admin);

        sync.sign_out();
        assert!(!sync.is_admin());

        assert_eq!(sync.toggle_theme(), Theme::Light);
        assert_eq!(sync.snapshot().settings.theme, Theme::Light);

        sync.set_admin(true);
        let reopened = Synchronizer::new(LocalStore::new("test", backend.clone()));
        reopened.load_initial().await.unwrap();
        assert!(!reopened.is_admin());
        assert_eq!(reopened.snapshot().settings.theme, Theme::Dark);
    }

    #[tokio::test]
    async fn factory_reset_restores_defaults() {
        let (sync, _) = setup();
        sync.load_initial().await.unwrap();
        sync.set_admin(true);

        let mut channel = default_channel();
        channel.name = "Custom".to_string();
        sync.update_channel(channel).await.unwrap();
        sync.save_video(&video("3", "three")).await.unwrap();
        sync.delete_video("1").await.unwrap();

        let snapshot = sync.factory_reset().await.unwrap();

        assert!(sync.is_ready());
        assert_eq!(snapshot.videos, seed_videos());
        assert_eq!(snapshot.channel, default_channel());
        assert!(!snapshot.settings.is_admin);
        assert_eq!(sync.store().get_all_videos().await.unwrap(), seed_videos());
        assert_eq!(
            sync.store().get_channel().await.unwrap(),
            Some(default_channel())
        );
    }

    #[tokio::test]
    async fn factory_reset_failure_keeps_current_snapshot() {
        let (sync, backend) = setup();
        sync.load_initial().await.unwrap();
        let before = sync.snapshot();

        backend.fail_writes_to("test:videos");
        assert!(sync.factory_reset().await.is_err());
        assert!(Rc::ptr_eq(&before, &sync.snapshot()));
    }

    #[tokio::test]
    async fn add_then_delete_round_trip() {
        let (sync, _) = setup();

        let snapshot = sync.load_initial().await.unwrap();
        assert_eq!(ids(&snapshot.videos), vec!["1", "2"]);
        assert_eq!(snapshot.channel.name, "Chemicalbook India");

        sync.store().put_video(&video("3", "three")).await.unwrap();
        let videos = sync.refresh_videos().await.unwrap();
        assert_eq!(videos.len(), 3);
        assert!(videos.iter().any(|v| v.id == "3"));

        sync.store().delete_video("1").await.unwrap();
        let videos = sync.refresh_videos().await.unwrap();
        assert_eq!(ids(&videos), vec!["2", "3"]);
        assert_eq!(ids(&sync.snapshot().videos), vec!["2", "3"]);
    }
}
