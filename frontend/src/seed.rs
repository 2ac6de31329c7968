use crate::models::{Channel, Video};

const DEFAULT_CHANNEL_NAME: &str = "Chemicalbook India";
const DEFAULT_CHANNEL_AVATAR: &str = "https://picsum.photos/id/1/200/200";

pub fn default_channel() -> Channel {
    Channel {
        name: DEFAULT_CHANNEL_NAME.to_string(),
        handle: "@chemicalbookindia".to_string(),
        avatar: DEFAULT_CHANNEL_AVATAR.to_string(),
        banner: "https://picsum.photos/id/10/1600/400".to_string(),
        subscribers: 15400,
        description: "Official channel of Chemicalbook India. Leading chemical solutions and industry insights.".to_string(),
    }
}

/// Written to an empty store on first load. `video_url` stays empty until an
/// admin uploads real media.
pub fn seed_videos() -> Vec<Video> {
    vec![
        Video {
            id: "1".to_string(),
            title: "Introduction to Chemicalbook India Services".to_string(),
            description: "Welcome to our official platform. Learn about our core services and values.".to_string(),
            thumbnail: "https://picsum.photos/id/20/1280/720".to_string(),
            video_url: String::new(),
            duration: "05:20".to_string(),
            views: 12500,
            likes: 850,
            comments_count: 45,
            upload_date: "2 days ago".to_string(),
            channel_name: DEFAULT_CHANNEL_NAME.to_string(),
            channel_avatar: DEFAULT_CHANNEL_AVATAR.to_string(),
        },
        Video {
            id: "2".to_string(),
            title: "Modern Laboratory Techniques 2024".to_string(),
            description: "Deep dive into the latest laboratory safety and efficiency standards.".to_string(),
            thumbnail: "https://picsum.photos/id/21/1280/720".to_string(),
            video_url: String::new(),
            duration: "12:45".to_string(),
            views: 8900,
            likes: 320,
            comments_count: 12,
            upload_date: "1 week ago".to_string(),
            channel_name: DEFAULT_CHANNEL_NAME.to_string(),
            channel_avatar: DEFAULT_CHANNEL_AVATAR.to_string(),
        },
    ]
}
