use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

const UNKNOWN_YEAR: &str = "Unknown";
const DEFAULT_DURATION: &str = "4:20";

/// Treats a JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SongSource {
    Youtube,
    Spotify,
    #[default]
    #[serde(other)]
    Sample,
}

impl SongSource {
    pub fn label(self) -> &'static str {
        match self {
            Self::Youtube => "YouTube",
            Self::Spotify => "Spotify",
            Self::Sample => "Demo",
        }
    }

    /// Sources whose `youtube_id` resolves to a watch page.
    pub fn is_video_source(self) -> bool {
        matches!(self, Self::Youtube | Self::Sample)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Song {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artist: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub year: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: SongSource,
    #[serde(default)]
    pub youtube_id: Option<String>,
    #[serde(default)]
    pub spotify_id: Option<String>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub play_url: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub embed_url: Option<String>,
}

impl Song {
    pub fn video_id(&self) -> Option<&str> {
        non_empty(&self.youtube_id)
    }

    pub fn spotify_id(&self) -> Option<&str> {
        non_empty(&self.spotify_id)
    }

    pub fn preview_url(&self) -> Option<&str> {
        non_empty(&self.preview_url)
    }

    pub fn thumbnail(&self) -> Option<&str> {
        non_empty(&self.thumbnail)
    }

    pub fn album(&self) -> Option<&str> {
        non_empty(&self.album)
    }

    /// The play URL, unless it is one of the backend's `#sample` placeholders.
    pub fn play_url(&self) -> Option<&str> {
        non_empty(&self.play_url).filter(|url| !is_placeholder_play_url(url))
    }

    pub fn is_playable(&self) -> bool {
        self.video_id().is_some() || self.spotify_id().is_some() || self.play_url().is_some()
    }

    pub fn year_label(&self) -> &str {
        match self.year.trim() {
            "" => UNKNOWN_YEAR,
            year => year,
        }
    }

    pub fn duration_label(&self) -> &str {
        match self.duration.trim() {
            "" => DEFAULT_DURATION,
            duration => duration,
        }
    }
}

pub fn is_placeholder_play_url(url: &str) -> bool {
    let trimmed = url.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Happy,
    Sad,
    Romantic,
    Motivation,
    Party,
    Chill,
    Devotional,
    Classical,
}

impl Mood {
    pub const ALL: [Mood; 8] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Romantic,
        Mood::Motivation,
        Mood::Party,
        Mood::Chill,
        Mood::Devotional,
        Mood::Classical,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Romantic => "romantic",
            Self::Motivation => "motivation",
            Self::Party => "party",
            Self::Chill => "chill",
            Self::Devotional => "devotional",
            Self::Classical => "classical",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Sad => "Sad",
            Self::Romantic => "Romantic",
            Self::Motivation => "Motivation",
            Self::Party => "Party",
            Self::Chill => "Chill",
            Self::Devotional => "Devotional",
            Self::Classical => "Classical",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        Self::ALL
            .into_iter()
            .find(|mood| mood.token().eq_ignore_ascii_case(token))
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Artist(String),
    Mood(Mood),
}

impl Query {
    /// Unknown tokens fall back to the default mood.
    pub fn mood_token(token: &str) -> Self {
        Self::Mood(Mood::from_token(token).unwrap_or_default())
    }

    pub fn listing_title(&self) -> String {
        match self {
            Self::Artist(name) => format!("Songs by {name}"),
            Self::Mood(mood) => format!("{} Songs", mood.label()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProviderStatus {
    #[serde(default)]
    pub youtube: bool,
    #[serde(default)]
    pub spotify: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HealthReport {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub apis: ProviderStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SongsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub songs: Vec<Song>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A rendered result set: the heading plus the songs under it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SongListing {
    pub title: String,
    pub songs: Vec<Song>,
}
