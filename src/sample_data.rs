// Static song tables used whenever the catalogue API is unavailable or returns nothing.

use crate::api::links::{youtube_thumbnail_url, youtube_watch_url, ThumbnailQuality};
use crate::api::{Mood, Song, SongSource};

/// Embeddable video ids the artist generator cycles through.
pub const ARTIST_VIDEO_POOL: [&str; 5] = [
    "z9D71pQaTnc",
    "kJQP7kiw5Fk",
    "CevxZvSJLk8",
    "JGwWNGJdvx8",
    "fJ9rUzIMcZQ",
];

const ARTIST_TITLE_SUFFIXES: [&str; 5] = [
    "Hit Song 1",
    "Popular Track",
    "Best of Collection",
    "Latest Release",
    "Fan Favorite",
];

const DESPACITO: &str = "z9D71pQaTnc";
const SHAPE_OF_YOU: &str = "JGwWNGJdvx8";
const UPTOWN_FUNK: &str = "OPf0YbXqDm0";
const GANGNAM_STYLE: &str = "9bZkp7q19f0";
const SEE_YOU_AGAIN: &str = "RgKAFK5djSk";

struct MoodEntry {
    title: &'static str,
    artist: &'static str,
    year: &'static str,
    duration: &'static str,
    video_id: &'static str,
}

const fn entry(
    title: &'static str,
    artist: &'static str,
    year: &'static str,
    duration: &'static str,
    video_id: &'static str,
) -> MoodEntry {
    MoodEntry {
        title,
        artist,
        year,
        duration,
        video_id,
    }
}

const HAPPY: &[MoodEntry] = &[
    entry("Happy Bollywood Dance", "Various Artists", "2023", "4:20", DESPACITO),
    entry("Celebration Songs", "Bollywood Hits", "2022", "3:45", UPTOWN_FUNK),
    entry("Joyful Melodies", "Happy Music", "2023", "4:15", GANGNAM_STYLE),
];

const SAD: &[MoodEntry] = &[
    entry("Emotional Ballads", "Arijit Singh Style", "2023", "5:10", SEE_YOU_AGAIN),
    entry("Heart Touching Songs", "Sad Collection", "2022", "4:30", SHAPE_OF_YOU),
];

const ROMANTIC: &[MoodEntry] = &[
    entry("Love Songs Collection", "Romantic Hits", "2023", "4:45", SHAPE_OF_YOU),
    entry("Bollywood Romance", "Love Ballads", "2022", "5:20", DESPACITO),
];

const MOTIVATION: &[MoodEntry] = &[entry(
    "Inspirational Tracks",
    "Motivational Music",
    "2023",
    "4:00",
    UPTOWN_FUNK,
)];

const PARTY: &[MoodEntry] = &[
    entry("Party Anthems", "Dance Hits", "2023", "3:55", GANGNAM_STYLE),
    entry("Club Bangers", "Party Music", "2023", "4:10", UPTOWN_FUNK),
];

const CHILL: &[MoodEntry] = &[entry(
    "Relaxing Vibes",
    "Chill Collection",
    "2023",
    "5:30",
    SHAPE_OF_YOU,
)];

const DEVOTIONAL: &[MoodEntry] = &[entry(
    "Spiritual Songs",
    "Devotional Music",
    "2023",
    "6:00",
    SEE_YOU_AGAIN,
)];

const CLASSICAL: &[MoodEntry] = &[entry(
    "Classical Fusion",
    "Traditional Artists",
    "2023",
    "8:15",
    DESPACITO,
)];

fn mood_table(mood: Mood) -> &'static [MoodEntry] {
    match mood {
        Mood::Happy => HAPPY,
        Mood::Sad => SAD,
        Mood::Romantic => ROMANTIC,
        Mood::Motivation => MOTIVATION,
        Mood::Party => PARTY,
        Mood::Chill => CHILL,
        Mood::Devotional => DEVOTIONAL,
        Mood::Classical => CLASSICAL,
    }
}

fn youtube_song(title: String, artist: String, year: String, duration: String, video_id: &str) -> Song {
    Song {
        title,
        artist,
        year,
        duration,
        source: SongSource::Youtube,
        youtube_id: Some(video_id.to_string()),
        thumbnail: Some(youtube_thumbnail_url(video_id, ThumbnailQuality::High)),
        play_url: Some(youtube_watch_url(video_id)),
        ..Song::default()
    }
}

pub fn mood_songs(mood: Mood) -> Vec<Song> {
    mood_table(mood)
        .iter()
        .map(|entry| {
            youtube_song(
                entry.title.to_string(),
                entry.artist.to_string(),
                entry.year.to_string(),
                entry.duration.to_string(),
                entry.video_id,
            )
        })
        .collect()
}

pub fn artist_songs(artist: &str) -> Vec<Song> {
    ARTIST_TITLE_SUFFIXES
        .iter()
        .enumerate()
        .map(|(index, suffix)| {
            let video_id = ARTIST_VIDEO_POOL[index % ARTIST_VIDEO_POOL.len()];
            youtube_song(
                format!("{artist} - {suffix}"),
                artist.to_string(),
                (2020 + index).to_string(),
                format!("4:{:02}", 20 + index * 10),
                video_id,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Query;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn every_mood_has_playable_songs(
        #[values(
            Mood::Happy,
            Mood::Sad,
            Mood::Romantic,
            Mood::Motivation,
            Mood::Party,
            Mood::Chill,
            Mood::Devotional,
            Mood::Classical
        )]
        mood: Mood,
    ) {
        let songs = mood_songs(mood);
        assert!(!songs.is_empty());
        assert!(songs.iter().all(Song::is_playable));
        assert!(songs.iter().all(|song| song.source == SongSource::Youtube));
    }

    #[rstest]
    #[case("bhangra")]
    #[case("")]
    #[case("HAPPY ")]
    fn unknown_or_default_token_gives_happy_list(#[case] token: &str) {
        let Query::Mood(mood) = Query::mood_token(token) else {
            panic!("mood token parsed as an artist query");
        };
        assert_eq!(mood_songs(mood), mood_songs(Mood::Happy));
    }

    #[test]
    fn artist_samples_for_test_artist() {
        let songs = artist_songs("Test Artist");
        assert_eq!(songs.len(), 5);
        for (index, song) in songs.iter().enumerate() {
            assert_eq!(song.artist, "Test Artist");
            let video_id = song.video_id().unwrap();
            assert!(ARTIST_VIDEO_POOL.contains(&video_id));
            assert_eq!(video_id, ARTIST_VIDEO_POOL[index]);
            assert_eq!(
                song.play_url(),
                Some(format!("https://www.youtube.com/watch?v={video_id}").as_str())
            );
        }
        assert_eq!(songs[0].title, "Test Artist - Hit Song 1");
        assert_eq!(songs[4].title, "Test Artist - Fan Favorite");
        assert_eq!(songs[0].year, "2020");
        assert_eq!(songs[1].duration, "4:30");
    }

    #[test]
    fn artist_name_is_kept_verbatim() {
        let name = "<script>alert('x')</script> & Sons";
        let songs = artist_songs(name);
        assert_eq!(songs.len(), ARTIST_TITLE_SUFFIXES.len());
        assert!(songs.iter().all(|song| song.artist == name));
        assert!(songs[2].title.starts_with(name));
    }
}
