use crate::api::links::PLACEHOLDER_THUMBNAIL;
use crate::api::{Song, SongSource};
use crate::components::Icon;
use dioxus::prelude::*;

fn source_icon(source: SongSource) -> &'static str {
    match source {
        SongSource::Youtube => "youtube",
        SongSource::Spotify => "spotify",
        SongSource::Sample => "music",
    }
}

/// Replaces the whole song region with `songs`, or the empty state when there are none.
#[component]
pub fn SongList(title: String, songs: Vec<Song>, on_select: EventHandler<Song>) -> Element {
    if songs.is_empty() {
        return rsx! {
            div { class: "song-list-empty",
                Icon { name: "music".to_string(), class: "w-12 h-12".to_string() }
                h3 { "No songs found" }
                p { "Try searching for a different artist or check your connection." }
            }
        };
    }

    rsx! {
        section { class: "song-list",
            h2 { class: "song-list-title", "{title}" }
            div { class: "song-grid",
                for (index, song) in songs.into_iter().enumerate() {
                    SongCard {
                        key: "{index}-{song.title}-{song.artist}",
                        song,
                        on_select,
                    }
                }
            }
        }
    }
}

#[component]
fn SongCard(song: Song, on_select: EventHandler<Song>) -> Element {
    let mut thumbnail_failed = use_signal(|| false);
    let thumbnail = if thumbnail_failed() {
        PLACEHOLDER_THUMBNAIL.to_string()
    } else {
        song.thumbnail()
            .unwrap_or(PLACEHOLDER_THUMBNAIL)
            .to_string()
    };
    let album = song.album().map(str::to_string);
    let icon = source_icon(song.source);
    let source_label = song.source.label();
    let demo_only = !song.is_playable();

    rsx! {
        div { class: "song-card",
            div { class: "song-thumb",
                img {
                    src: "{thumbnail}",
                    alt: "{song.title}",
                    "loading": "lazy",
                    onerror: move |_| thumbnail_failed.set(true),
                }
                button {
                    class: "song-play",
                    aria_label: "Play options",
                    onclick: {
                        let song = song.clone();
                        move |_| on_select.call(song.clone())
                    },
                    Icon { name: "play".to_string(), class: "w-6 h-6".to_string() }
                }
            }
            div { class: "song-info",
                h3 { class: "song-title", "{song.title}" }
                if demo_only {
                    span { class: "song-demo-badge", "Sample" }
                }
                p { class: "song-artist", "{song.artist} • {song.year_label()}" }
                if let Some(album) = album {
                    p { class: "song-album", "Album: {album}" }
                }
                div { class: "song-meta",
                    span { class: "song-duration", "{song.duration_label()}" }
                    span { class: "song-source", title: "{source_label}",
                        Icon { name: icon.to_string(), class: "w-4 h-4".to_string() }
                    }
                }
            }
        }
    }
}
