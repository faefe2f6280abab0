//! Availability probing and song retrieval with the local sample-data fallback.
//!
//! Nothing here fails outward: every error path ends in a sample listing plus a notice
//! describing which path was taken.

use crate::api::{Mood, MusicApi, ProviderStatus, Query, Song, SongListing};
use crate::diagnostics::PerfTimer;
use crate::notifications::{Notice, NotificationKind};
use crate::sample_data;
use crate::utils::with_timeout;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Availability {
    #[default]
    Probing,
    Online(ProviderStatus),
    Offline,
}

impl Availability {
    pub fn is_online(self) -> bool {
        matches!(self, Self::Online(_))
    }

    pub fn is_resolved(self) -> bool {
        !matches!(self, Self::Probing)
    }

    pub fn status_line(self) -> String {
        match self {
            Self::Probing => "Checking connection...".to_string(),
            Self::Online(apis) => format!(
                "APIs Connected - YouTube: {} | Spotify: {}",
                tick(apis.youtube),
                tick(apis.spotify)
            ),
            Self::Offline => "Demo Mode - Add API keys for real music".to_string(),
        }
    }

    pub fn status_notice(self) -> Notice {
        let kind = if self.is_online() {
            NotificationKind::Success
        } else {
            NotificationKind::Warning
        };
        let title = if self.is_online() {
            "Connected"
        } else {
            "Offline Mode"
        };
        Notice::new(kind, title, self.status_line())
    }
}

fn tick(configured: bool) -> &'static str {
    if configured {
        "✓"
    } else {
        "✗"
    }
}

/// One bounded health check. Any failure, including the timeout, means offline.
pub async fn probe_availability<A: MusicApi>(api: &A, timeout: Duration) -> Availability {
    match with_timeout(timeout, api.health()).await {
        Ok(report) => {
            info!(
                youtube = report.apis.youtube,
                spotify = report.apis.spotify,
                "backend API is running"
            );
            Availability::Online(report.apis)
        }
        Err(err) => {
            info!(error = %err, "backend API not available, using offline mode");
            Availability::Offline
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongOrigin {
    /// Authoritative songs from the catalogue API.
    Remote,
    /// Sample data because the API is off or had nothing usable.
    Demo,
    /// Sample data because the API could not be reached.
    Offline,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub query: Query,
    pub songs: Vec<Song>,
    pub origin: SongOrigin,
}

impl FetchOutcome {
    fn fallback(query: &Query, origin: SongOrigin) -> Self {
        let songs = match query {
            Query::Artist(name) => sample_data::artist_songs(name),
            Query::Mood(mood) => sample_data::mood_songs(*mood),
        };
        Self {
            query: query.clone(),
            songs,
            origin,
        }
    }

    pub fn listing(&self) -> SongListing {
        SongListing {
            title: self.query.listing_title(),
            songs: self.songs.clone(),
        }
    }

    pub fn notice(&self) -> Notice {
        match (&self.query, self.origin) {
            (Query::Artist(_), SongOrigin::Remote) => Notice::info(
                "Search Complete",
                format!("Found {} songs", self.songs.len()),
            ),
            (Query::Mood(mood), SongOrigin::Remote) => {
                Notice::info("Mood Selection", format!("Loaded {mood} songs"))
            }
            (Query::Artist(name), SongOrigin::Demo) => {
                Notice::info("Demo Mode", format!("Showing sample songs for {name}"))
            }
            (Query::Mood(mood), SongOrigin::Demo) => {
                Notice::info("Demo Mode", format!("{} songs loaded", mood.label()))
            }
            (Query::Artist(_), SongOrigin::Offline) => {
                Notice::info("Offline Mode", "Showing sample data")
            }
            (Query::Mood(_), SongOrigin::Offline) => {
                Notice::info("Offline Mode", "Showing local songs")
            }
        }
    }
}

pub async fn fetch_songs<A: MusicApi>(api: &A, online: bool, query: &Query) -> FetchOutcome {
    if !online {
        return FetchOutcome::fallback(query, SongOrigin::Demo);
    }

    let timer = PerfTimer::start("fetch_songs");
    let result = match query {
        Query::Artist(name) => api.search_artist(name).await,
        Query::Mood(mood) => api.mood_songs(*mood).await,
    };

    match result {
        Ok(songs) if !songs.is_empty() => {
            timer.finish(&format!("{} remote songs", songs.len()));
            FetchOutcome {
                query: query.clone(),
                songs,
                origin: SongOrigin::Remote,
            }
        }
        Ok(_) => {
            timer.finish("empty result, using samples");
            FetchOutcome::fallback(query, SongOrigin::Demo)
        }
        Err(err) => {
            warn!(error = %err, ?query, "song request failed, using samples");
            let origin = if err.is_offline_failure() {
                SongOrigin::Offline
            } else {
                SongOrigin::Demo
            };
            FetchOutcome::fallback(query, origin)
        }
    }
}

/// Hands out increasing tickets so a response can tell whether a newer request superseded it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestSequence {
    latest: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestSequence {
    pub fn begin(&mut self) -> RequestTicket {
        self.latest = self.latest.saturating_add(1);
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}

/// Typed queries only search on their own once they are this long.
pub const MIN_AUTO_SEARCH_CHARS: usize = 3;

/// Turns raw search input into an artist query, or the notice explaining why not.
pub fn artist_query(raw: &str) -> Result<Query, Notice> {
    let artist = raw.trim();
    if artist.is_empty() {
        return Err(Notice::info("Search Error", "Please enter an artist name"));
    }
    Ok(Query::Artist(artist.to_string()))
}

pub fn wants_auto_search(raw: &str) -> bool {
    raw.trim().chars().count() >= MIN_AUTO_SEARCH_CHARS
}

/// The song region: what it shows, whether it waits, and which request owns it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingState {
    sequence: RequestSequence,
    listing: Option<SongListing>,
    loading: bool,
    active_mood: Option<Mood>,
}

impl ListingState {
    pub fn begin(&mut self, query: &Query) -> RequestTicket {
        self.loading = true;
        self.active_mood = match query {
            Query::Mood(mood) => Some(*mood),
            Query::Artist(_) => None,
        };
        self.sequence.begin()
    }

    /// Installs `outcome` if `ticket` is still the latest and returns its notice.
    /// A superseded response changes nothing.
    pub fn apply(&mut self, ticket: RequestTicket, outcome: &FetchOutcome) -> Option<Notice> {
        if !self.sequence.is_current(ticket) {
            return None;
        }
        self.listing = Some(outcome.listing());
        self.loading = false;
        Some(outcome.notice())
    }

    pub fn listing(&self) -> Option<&SongListing> {
        self.listing.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn active_mood(&self) -> Option<Mood> {
        self.active_mood
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, HealthReport};
    use crate::sample_data::ARTIST_VIDEO_POOL;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::cell::Cell;

    #[derive(Clone, Copy)]
    enum Reply {
        Songs(usize),
        Status(u16),
        Malformed,
        Refused,
        Timeout,
        Hang,
    }

    struct FakeApi {
        reply: Reply,
        calls: Cell<usize>,
    }

    impl FakeApi {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: Cell::new(0),
            }
        }

        async fn answer(&self, artist: &str) -> Result<Vec<Song>, ApiError> {
            self.calls.set(self.calls.get() + 1);
            match self.reply {
                Reply::Songs(count) => Ok((0..count)
                    .map(|index| Song {
                        title: format!("Remote {index}"),
                        artist: artist.to_string(),
                        ..Song::default()
                    })
                    .collect()),
                Reply::Status(code) => Err(ApiError::Status(code)),
                Reply::Malformed => Err(ApiError::Payload("expected value".to_string())),
                Reply::Refused => Err(ApiError::Reported("quota exceeded".to_string())),
                Reply::Timeout => Err(ApiError::Timeout(Duration::from_secs(5))),
                Reply::Hang => std::future::pending().await,
            }
        }
    }

    impl MusicApi for FakeApi {
        async fn health(&self) -> Result<HealthReport, ApiError> {
            self.answer("").await.map(|_| HealthReport {
                success: Some(true),
                message: Some("API is running".to_string()),
                apis: ProviderStatus {
                    youtube: true,
                    spotify: false,
                },
            })
        }

        async fn search_artist(&self, artist: &str) -> Result<Vec<Song>, ApiError> {
            self.answer(artist).await
        }

        async fn mood_songs(&self, _mood: Mood) -> Result<Vec<Song>, ApiError> {
            self.answer("Various Artists").await
        }
    }

    #[tokio::test]
    async fn offline_never_calls_the_api() {
        let api = FakeApi::new(Reply::Songs(3));
        for mood in Mood::ALL {
            let outcome = fetch_songs(&api, false, &Query::Mood(mood)).await;
            assert!(!outcome.songs.is_empty());
            assert_eq!(outcome.origin, SongOrigin::Demo);
        }
        assert_eq!(api.calls.get(), 0);
    }

    #[tokio::test]
    async fn unknown_mood_token_offline_gives_default_list() {
        let api = FakeApi::new(Reply::Songs(3));
        let outcome = fetch_songs(&api, false, &Query::mood_token("qawwali")).await;
        assert_eq!(outcome.songs, sample_data::mood_songs(Mood::Happy));
        assert_eq!(outcome.listing().title, "Happy Songs");
    }

    #[tokio::test]
    async fn remote_songs_are_returned_as_is() {
        let api = FakeApi::new(Reply::Songs(4));
        let query = Query::Artist("Shreya Ghoshal".to_string());
        let outcome = fetch_songs(&api, true, &query).await;

        assert_eq!(outcome.origin, SongOrigin::Remote);
        assert_eq!(outcome.songs.len(), 4);
        assert_eq!(outcome.songs[0].title, "Remote 0");
        assert_eq!(
            outcome.notice(),
            Notice::info("Search Complete", "Found 4 songs")
        );
    }

    #[rstest]
    #[case::empty(Reply::Songs(0), SongOrigin::Demo)]
    #[case::server_error(Reply::Status(500), SongOrigin::Demo)]
    #[case::refused(Reply::Refused, SongOrigin::Demo)]
    #[case::malformed(Reply::Malformed, SongOrigin::Offline)]
    #[case::timeout(Reply::Timeout, SongOrigin::Offline)]
    #[tokio::test]
    async fn unusable_remote_results_fall_back(#[case] reply: Reply, #[case] origin: SongOrigin) {
        let api = FakeApi::new(reply);
        let outcome = fetch_songs(&api, true, &Query::Artist("Test Artist".to_string())).await;

        assert_eq!(api.calls.get(), 1);
        assert_eq!(outcome.origin, origin);
        assert_eq!(outcome.songs, sample_data::artist_songs("Test Artist"));
    }

    #[tokio::test]
    async fn test_artist_without_backend() {
        let api = FakeApi::new(Reply::Status(503));
        let probed = probe_availability(&api, Duration::from_millis(50)).await;
        assert_eq!(probed, Availability::Offline);

        let query = Query::Artist("Test Artist".to_string());
        let outcome = fetch_songs(&api, probed.is_online(), &query).await;

        assert_eq!(outcome.songs.len(), 5);
        for song in &outcome.songs {
            assert_eq!(song.artist, "Test Artist");
            assert!(ARTIST_VIDEO_POOL.contains(&song.video_id().unwrap()));
        }
        assert_eq!(
            outcome.notice(),
            Notice::info("Demo Mode", "Showing sample songs for Test Artist")
        );
    }

    #[tokio::test]
    async fn failed_probe_still_yields_default_mood_listing() {
        let api = FakeApi::new(Reply::Timeout);
        let availability = probe_availability(&api, Duration::from_millis(50)).await;
        assert!(availability.is_resolved());
        assert!(!availability.is_online());

        let mut state = ListingState::default();
        let query = Query::Mood(Mood::default());
        let ticket = state.begin(&query);
        assert!(state.is_loading());
        assert_eq!(state.active_mood(), Some(Mood::Happy));

        let outcome = fetch_songs(&api, availability.is_online(), &query).await;
        let notice = state.apply(ticket, &outcome);

        assert!(!state.is_loading());
        assert_eq!(notice, Some(Notice::info("Demo Mode", "Happy songs loaded")));
        let listing = state.listing().unwrap();
        assert_eq!(listing.title, "Happy Songs");
        assert_eq!(listing.songs, sample_data::mood_songs(Mood::Happy));
    }

    #[tokio::test]
    async fn superseded_response_leaves_listing_alone() {
        let api = FakeApi::new(Reply::Songs(2));
        let mut state = ListingState::default();

        let slow_query = Query::Artist("Lata Mangeshkar".to_string());
        let slow = state.begin(&slow_query);
        let fast = state.begin(&Query::Mood(Mood::Romantic));

        let stale = fetch_songs(&api, true, &slow_query).await;
        assert_eq!(state.apply(slow, &stale), None);
        assert!(state.is_loading());
        assert_eq!(state.listing(), None);
        assert_eq!(state.active_mood(), Some(Mood::Romantic));

        let fresh = fetch_songs(&api, true, &Query::Mood(Mood::Romantic)).await;
        assert!(state.apply(fast, &fresh).is_some());
        assert!(!state.is_loading());
        assert_eq!(state.listing().unwrap().title, "Romantic Songs");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_search_is_refused(#[case] raw: &str) {
        assert_eq!(
            artist_query(raw),
            Err(Notice::info("Search Error", "Please enter an artist name"))
        );
    }

    #[test]
    fn search_input_is_trimmed() {
        assert_eq!(
            artist_query("  Arijit Singh "),
            Ok(Query::Artist("Arijit Singh".to_string()))
        );
    }

    #[rstest]
    #[case("", false)]
    #[case("KK", false)]
    #[case(" KK  ", false)]
    #[case("Ali", true)]
    #[case("Arijit", true)]
    fn auto_search_needs_three_characters(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(wants_auto_search(raw), expected);
    }

    #[tokio::test]
    async fn hanging_probe_is_bounded() {
        let api = FakeApi::new(Reply::Hang);
        let availability = probe_availability(&api, Duration::from_millis(20)).await;
        assert_eq!(availability, Availability::Offline);
    }

    #[tokio::test]
    async fn healthy_probe_records_providers() {
        let api = FakeApi::new(Reply::Songs(1));
        let availability = probe_availability(&api, Duration::from_secs(1)).await;
        assert_eq!(
            availability,
            Availability::Online(ProviderStatus {
                youtube: true,
                spotify: false
            })
        );
        assert_eq!(
            availability.status_line(),
            "APIs Connected - YouTube: ✓ | Spotify: ✗"
        );
    }

    #[test]
    fn offline_status_line() {
        assert_eq!(
            Availability::Offline.status_line(),
            "Demo Mode - Add API keys for real music"
        );
        assert_eq!(
            Availability::Offline.status_notice().kind,
            NotificationKind::Warning
        );
    }

    #[rstest]
    #[case(Query::Mood(Mood::Chill), SongOrigin::Remote, "Mood Selection", "Loaded chill songs")]
    #[case(Query::Mood(Mood::Chill), SongOrigin::Demo, "Demo Mode", "Chill songs loaded")]
    #[case(Query::Mood(Mood::Chill), SongOrigin::Offline, "Offline Mode", "Showing local songs")]
    #[case(Query::Artist("KK".to_string()), SongOrigin::Offline, "Offline Mode", "Showing sample data")]
    fn outcome_notices(
        #[case] query: Query,
        #[case] origin: SongOrigin,
        #[case] title: &str,
        #[case] message: &str,
    ) {
        let outcome = FetchOutcome {
            query,
            songs: Vec::new(),
            origin,
        };
        assert_eq!(outcome.notice(), Notice::info(title, message));
    }

    #[test]
    fn stale_tickets_are_rejected() {
        let mut sequence = RequestSequence::default();
        let first = sequence.begin();
        assert!(sequence.is_current(first));

        let second = sequence.begin();
        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
    }
}
