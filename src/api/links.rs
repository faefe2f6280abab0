// Outbound link and embed URL templates for the external playback providers.

pub const PLACEHOLDER_THUMBNAIL: &str =
    "https://via.placeholder.com/300x300/667eea/ffffff?text=%F0%9F%8E%B5";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailQuality {
    High,
    MaxRes,
}

impl ThumbnailQuality {
    fn file_name(self) -> &'static str {
        match self {
            Self::High => "hqdefault.jpg",
            Self::MaxRes => "maxresdefault.jpg",
        }
    }
}

pub fn youtube_watch_url(video_id: &str) -> String {
    format!(
        "https://www.youtube.com/watch?v={}",
        urlencoding::encode(video_id.trim())
    )
}

pub fn spotify_track_url(track_id: &str) -> String {
    format!(
        "https://open.spotify.com/track/{}",
        urlencoding::encode(track_id.trim())
    )
}

pub fn youtube_search_url(query: &str) -> String {
    format!(
        "https://www.youtube.com/results?search_query={}",
        urlencoding::encode(query.trim())
    )
}

pub fn youtube_thumbnail_url(video_id: &str, quality: ThumbnailQuality) -> String {
    format!(
        "https://img.youtube.com/vi/{}/{}",
        urlencoding::encode(video_id.trim()),
        quality.file_name()
    )
}

/// Autoplaying embed; browsers only allow that unattended when muted.
pub fn youtube_embed_url(video_id: &str, muted: bool) -> String {
    let mute = if muted { "&mute=1" } else { "" };
    format!(
        "https://www.youtube.com/embed/{}?autoplay=1{mute}&rel=0&modestbranding=1",
        urlencoding::encode(video_id.trim())
    )
}
