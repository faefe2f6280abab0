//! Playback option selection for the currently selected song.
//!
//! The session is a small state machine:
//! `Closed -> OptionsShown -> {PreviewShown | EmbedShown | ThumbnailShown} -> Closed`.
//! Only one playback surface (preview audio or video embed) can exist, because both live
//! in the single `PlaybackState` value.

use crate::api::links::{spotify_track_url, youtube_embed_url, youtube_search_url, youtube_watch_url};
use crate::api::{Song, SongSource};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PlaybackState {
    #[default]
    Closed,
    OptionsShown {
        song: Song,
    },
    ThumbnailShown {
        song: Song,
        video_id: String,
    },
    EmbedShown {
        song: Song,
        video_id: String,
        muted: bool,
    },
    PreviewShown {
        song: Song,
        preview_url: String,
    },
}

impl PlaybackState {
    fn name(&self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::OptionsShown { .. } => "showing options",
            Self::ThumbnailShown { .. } => "showing the thumbnail",
            Self::EmbedShown { .. } => "embedding video",
            Self::PreviewShown { .. } => "playing a preview",
        }
    }

    pub fn song(&self) -> Option<&Song> {
        match self {
            Self::Closed => None,
            Self::OptionsShown { song }
            | Self::ThumbnailShown { song, .. }
            | Self::EmbedShown { song, .. }
            | Self::PreviewShown { song, .. } => Some(song),
        }
    }

    pub fn surface(&self) -> Option<PlaybackSurface> {
        match self {
            Self::EmbedShown { .. } => Some(PlaybackSurface::Embed),
            Self::PreviewShown { .. } => Some(PlaybackSurface::Audio),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackSurface {
    Audio,
    Embed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
    #[error("\"{0}\" has no video to embed")]
    NoVideo(String),
    #[error("\"{0}\" has no preview audio")]
    NoPreview(String),
    #[error("playback was refused: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackSession {
    state: PlaybackState,
}

impl PlaybackSession {
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn song(&self) -> Option<&Song> {
        self.state.song()
    }

    pub fn active_surface(&self) -> Option<PlaybackSurface> {
        self.state.surface()
    }

    /// Stops whatever is playing and shows the options for `song`.
    /// Returns the surface that was stopped so the caller can silence it.
    pub fn select(&mut self, song: Song) -> Option<PlaybackSurface> {
        let stopped = self.active_surface();
        self.state = PlaybackState::OptionsShown { song };
        stopped
    }

    pub fn close(&mut self) -> Option<PlaybackSurface> {
        let stopped = self.active_surface();
        self.state = PlaybackState::Closed;
        stopped
    }

    pub fn back_to_options(&mut self) -> Result<Option<PlaybackSurface>, PlaybackError> {
        let song = self.require_song("go back to options")?.clone();
        Ok(self.select(song))
    }

    pub fn show_thumbnail(&mut self) -> Result<(), PlaybackError> {
        let song = match &self.state {
            PlaybackState::OptionsShown { song } => song.clone(),
            other => return Err(invalid("preview the thumbnail", other)),
        };
        let video_id = song
            .video_id()
            .ok_or_else(|| PlaybackError::NoVideo(song.title.clone()))?
            .to_string();
        self.state = PlaybackState::ThumbnailShown { song, video_id };
        Ok(())
    }

    /// Starts the embed muted; autoplay with sound is usually blocked.
    pub fn embed(&mut self) -> Result<(), PlaybackError> {
        let song = match &self.state {
            PlaybackState::OptionsShown { song }
            | PlaybackState::ThumbnailShown { song, .. }
            | PlaybackState::EmbedShown { song, .. } => song.clone(),
            other => return Err(invalid("embed the video", other)),
        };
        let video_id = song
            .video_id()
            .ok_or_else(|| PlaybackError::NoVideo(song.title.clone()))?
            .to_string();
        self.state = PlaybackState::EmbedShown {
            song,
            video_id,
            muted: true,
        };
        Ok(())
    }

    pub fn unmute(&mut self) -> Result<(), PlaybackError> {
        match &mut self.state {
            PlaybackState::EmbedShown { muted, .. } => {
                *muted = false;
                Ok(())
            }
            other => Err(invalid("enable sound", other)),
        }
    }

    pub fn play_preview(&mut self) -> Result<(), PlaybackError> {
        let song = match &self.state {
            PlaybackState::OptionsShown { song } => song.clone(),
            other => return Err(invalid("play the preview", other)),
        };
        let preview_url = song
            .preview_url()
            .ok_or_else(|| PlaybackError::NoPreview(song.title.clone()))?
            .to_string();
        self.state = PlaybackState::PreviewShown { song, preview_url };
        Ok(())
    }

    /// Natural end of the preview audio.
    pub fn preview_ended(&mut self) -> Result<(), PlaybackError> {
        match &self.state {
            PlaybackState::PreviewShown { .. } => {
                self.state = PlaybackState::Closed;
                Ok(())
            }
            other => Err(invalid("finish the preview", other)),
        }
    }

    pub fn embed_url(&self) -> Option<String> {
        match &self.state {
            PlaybackState::EmbedShown {
                video_id, muted, ..
            } => Some(youtube_embed_url(video_id, *muted)),
            _ => None,
        }
    }

    /// Canonical "open externally" target. Never changes state.
    pub fn external_url(&self) -> Option<String> {
        self.song().and_then(external_url)
    }

    fn require_song(&self, action: &'static str) -> Result<&Song, PlaybackError> {
        self.state.song().ok_or(PlaybackError::InvalidTransition {
            action,
            state: self.state.name(),
        })
    }
}

fn invalid(action: &'static str, state: &PlaybackState) -> PlaybackError {
    PlaybackError::InvalidTransition {
        action,
        state: state.name(),
    }
}

pub fn external_url(song: &Song) -> Option<String> {
    if let Some(video_id) = song.video_id().filter(|_| song.source.is_video_source()) {
        return Some(youtube_watch_url(video_id));
    }
    if song.source == SongSource::Spotify {
        if let Some(track_id) = song.spotify_id() {
            return Some(spotify_track_url(track_id));
        }
    }
    song.play_url().map(str::to_string)
}

/// Which playback affordances a song offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackOptions {
    pub video_id: Option<String>,
    pub preview_url: Option<String>,
    pub spotify_id: Option<String>,
    /// Search target offered when the song has nothing to play.
    pub demo_search: Option<String>,
}

impl PlaybackOptions {
    pub fn for_song(song: &Song) -> Self {
        let video_id = song.video_id().map(str::to_string);
        let preview_url = song.preview_url().map(str::to_string);
        let spotify_id = song.spotify_id().map(str::to_string);
        let demo_search = (video_id.is_none() && preview_url.is_none() && spotify_id.is_none())
            .then(|| youtube_search_url(&format!("{} {}", song.title, song.artist)));

        Self {
            video_id,
            preview_url,
            spotify_id,
            demo_search,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn video_song() -> Song {
        Song {
            title: "Tum Hi Ho".to_string(),
            artist: "Arijit Singh".to_string(),
            source: SongSource::Youtube,
            youtube_id: Some("Umqb9KENgmk".to_string()),
            play_url: Some("https://www.youtube.com/watch?v=Umqb9KENgmk".to_string()),
            ..Song::default()
        }
    }

    #[fixture]
    fn preview_song() -> Song {
        Song {
            title: "Jai Ho".to_string(),
            artist: "A.R. Rahman".to_string(),
            source: SongSource::Spotify,
            spotify_id: Some("2nLtzopw4rPReszdYBJU6h".to_string()),
            preview_url: Some("https://p.scdn.co/mp3-preview/abc".to_string()),
            ..Song::default()
        }
    }

    #[fixture]
    fn demo_song() -> Song {
        Song {
            title: "Kal Ho Naa Ho".to_string(),
            artist: "Sonu Nigam".to_string(),
            source: SongSource::Sample,
            play_url: Some("#sample-happy".to_string()),
            ..Song::default()
        }
    }

    #[rstest]
    fn select_then_embed(video_song: Song) {
        let mut session = PlaybackSession::default();
        assert_eq!(session.select(video_song.clone()), None);
        assert_eq!(session.active_surface(), None);

        session.embed().unwrap();
        assert_eq!(session.active_surface(), Some(PlaybackSurface::Embed));
        assert_eq!(
            session.embed_url().as_deref(),
            Some("https://www.youtube.com/embed/Umqb9KENgmk?autoplay=1&mute=1&rel=0&modestbranding=1")
        );

        session.unmute().unwrap();
        assert_eq!(
            session.embed_url().as_deref(),
            Some("https://www.youtube.com/embed/Umqb9KENgmk?autoplay=1&rel=0&modestbranding=1")
        );
        assert_eq!(session.song(), Some(&video_song));
    }

    #[rstest]
    fn second_selection_leaves_one_surface(video_song: Song, preview_song: Song) {
        let mut session = PlaybackSession::default();
        session.select(preview_song);
        session.play_preview().unwrap();
        assert_eq!(session.active_surface(), Some(PlaybackSurface::Audio));

        let stopped = session.select(video_song);
        assert_eq!(stopped, Some(PlaybackSurface::Audio));
        assert_eq!(session.active_surface(), None);

        session.embed().unwrap();
        assert_eq!(session.active_surface(), Some(PlaybackSurface::Embed));
    }

    #[rstest]
    fn preview_end_closes(preview_song: Song) {
        let mut session = PlaybackSession::default();
        session.select(preview_song);
        session.play_preview().unwrap();
        session.preview_ended().unwrap();
        assert_eq!(session.state(), &PlaybackState::Closed);
        assert_eq!(session.active_surface(), None);
    }

    #[rstest]
    fn thumbnail_then_back_or_embed(video_song: Song) {
        let mut session = PlaybackSession::default();
        session.select(video_song);
        session.show_thumbnail().unwrap();
        assert!(matches!(session.state(), PlaybackState::ThumbnailShown { video_id, .. } if video_id == "Umqb9KENgmk"));

        session.back_to_options().unwrap();
        assert!(matches!(session.state(), PlaybackState::OptionsShown { .. }));

        session.show_thumbnail().unwrap();
        session.embed().unwrap();
        assert_eq!(session.active_surface(), Some(PlaybackSurface::Embed));
    }

    #[rstest]
    fn guarded_transitions(demo_song: Song, preview_song: Song) {
        let mut session = PlaybackSession::default();
        assert_eq!(
            session.embed(),
            Err(PlaybackError::InvalidTransition {
                action: "embed the video",
                state: "closed"
            })
        );
        assert!(session.back_to_options().is_err());

        session.select(demo_song);
        assert_eq!(
            session.embed(),
            Err(PlaybackError::NoVideo("Kal Ho Naa Ho".to_string()))
        );
        assert_eq!(
            session.play_preview(),
            Err(PlaybackError::NoPreview("Kal Ho Naa Ho".to_string()))
        );
        assert!(matches!(session.state(), PlaybackState::OptionsShown { .. }));

        session.select(preview_song);
        assert!(session.preview_ended().is_err());
        assert!(session.unmute().is_err());
    }

    #[rstest]
    fn close_reports_stopped_surface(video_song: Song) {
        let mut session = PlaybackSession::default();
        assert_eq!(session.close(), None);
        session.select(video_song);
        session.embed().unwrap();
        assert_eq!(session.close(), Some(PlaybackSurface::Embed));
        assert_eq!(session.external_url(), None);
    }

    #[rstest]
    fn external_url_prefers_video(preview_song: Song) {
        let mut preview_song = preview_song;
        preview_song.source = SongSource::Youtube;
        preview_song.youtube_id = Some("OPf0YbXqDm0".to_string());
        preview_song.play_url = Some("https://example.com/elsewhere".to_string());
        assert_eq!(
            external_url(&preview_song).as_deref(),
            Some("https://www.youtube.com/watch?v=OPf0YbXqDm0")
        );
    }

    #[rstest]
    fn external_url_for_spotify(preview_song: Song) {
        assert_eq!(
            external_url(&preview_song).as_deref(),
            Some("https://open.spotify.com/track/2nLtzopw4rPReszdYBJU6h")
        );
    }

    #[rstest]
    fn external_url_skips_placeholders(demo_song: Song) {
        let mut demo_song = demo_song;
        assert_eq!(external_url(&demo_song), None);
        demo_song.play_url = Some("https://example.com/listen".to_string());
        assert_eq!(
            external_url(&demo_song).as_deref(),
            Some("https://example.com/listen")
        );
    }

    #[rstest]
    fn open_externally_keeps_state(video_song: Song) {
        let mut session = PlaybackSession::default();
        session.select(video_song);
        session.embed().unwrap();
        let before = session.clone();
        assert!(session.external_url().is_some());
        assert_eq!(session, before);
    }

    #[rstest]
    fn options_by_identifiers(video_song: Song, preview_song: Song, demo_song: Song) {
        let video = PlaybackOptions::for_song(&video_song);
        assert_eq!(video.video_id.as_deref(), Some("Umqb9KENgmk"));
        assert_eq!(video.preview_url, None);
        assert_eq!(video.demo_search, None);

        let audio = PlaybackOptions::for_song(&preview_song);
        assert_eq!(audio.video_id, None);
        assert!(audio.preview_url.is_some());
        assert!(audio.spotify_id.is_some());
        assert_eq!(audio.demo_search, None);

        let demo = PlaybackOptions::for_song(&demo_song);
        assert_eq!(demo.video_id, None);
        assert_eq!(
            demo.demo_search.as_deref(),
            Some("https://www.youtube.com/results?search_query=Kal%20Ho%20Naa%20Ho%20Sonu%20Nigam")
        );
    }
}
