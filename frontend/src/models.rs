use serde::{Deserialize, Serialize};

/// A published video. `channel_name` and `channel_avatar` are a copy of the
/// channel identity taken when the video was saved; they are not kept in sync
/// with later channel edits.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub video_url: String,
    pub duration: String,
    pub views: u64,
    pub likes: u64,
    pub comments_count: u64,
    pub upload_date: String,
    pub channel_name: String,
    pub channel_avatar: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub name: String,
    pub handle: String,
    pub avatar: String,
    pub banner: String,
    pub subscribers: u64,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Page colours for the root element.
    pub fn page_classes(self) -> &'static str {
        match self {
            Theme::Dark => "bg-[#0f0f0f] text-white",
            Theme::Light => "bg-white text-zinc-900",
        }
    }
}

/// Session-only settings. Never persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SiteSettings {
    pub is_admin: bool,
    pub theme: Theme,
}

/// Everything the render layer draws from. Replaced wholesale on every change.
#[derive(Debug, Clone, PartialEq)]
pub struct AppSnapshot {
    pub videos: Vec<Video>,
    pub channel: Channel,
    pub settings: SiteSettings,
}

impl Default for AppSnapshot {
    fn default() -> Self {
        Self {
            videos: Vec::new(),
            channel: crate::seed::default_channel(),
            settings: SiteSettings::default(),
        }
    }
}
