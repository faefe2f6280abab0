use crate::api::links::{
    spotify_track_url, youtube_thumbnail_url, youtube_watch_url, ThumbnailQuality,
};
use crate::api::Song;
use crate::components::media::{open_external, silence, start_preview, PREVIEW_AUDIO_ID};
use crate::components::{Icon, Notifier};
use crate::notifications::{Notice, NotificationKind};
use crate::playback::{PlaybackError, PlaybackOptions, PlaybackSession, PlaybackState};
use dioxus::prelude::*;
use std::time::Duration;
use tracing::warn;

const SETUP_HINT_DELAY: Duration = Duration::from_millis(2000);
const VIDEO_ISSUE_DELAY: Duration = Duration::from_millis(1000);

/// Applies a guarded transition. A refused transition leaves the session as it was.
fn transition(
    mut session: Signal<PlaybackSession>,
    change: impl FnOnce(&mut PlaybackSession) -> Result<(), PlaybackError>,
) -> bool {
    match session.with_mut(change) {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, "ignored playback action");
            false
        }
    }
}

/// Stops whatever plays and opens the options for `song`.
pub fn select_song(mut session: Signal<PlaybackSession>, notifier: Notifier, song: Song) {
    let title = song.title.clone();
    let stopped = session.with_mut(|session| session.select(song));
    silence(stopped);
    notifier.send(
        NotificationKind::Music,
        "Playback Options",
        format!("Choose how to play \"{title}\""),
    );
}

fn stop_all(mut session: Signal<PlaybackSession>, notifier: Notifier) {
    let stopped = session.with_mut(PlaybackSession::close);
    silence(stopped);
    notifier.info("Stopped", "All playback stopped");
}

fn open_youtube(notifier: Notifier, video_id: &str) {
    open_external(&youtube_watch_url(video_id));
    notifier.send(
        NotificationKind::Success,
        "Opening YouTube",
        "Song opened in new tab - This always works!",
    );
}

fn show_demo_info(notifier: Notifier, title: String, artist: String) {
    notifier.info(
        "Demo Mode Active",
        format!("\"{title}\" by {artist} - Add YouTube/Spotify API keys for real music playback!"),
    );
    notifier.notify_after(
        SETUP_HINT_DELAY,
        Notice::new(
            NotificationKind::Warning,
            "Setup Guide",
            "Check \"How to Use\" page for complete API setup instructions",
        ),
    );
}

#[component]
pub fn PlaybackPanel(session: Signal<PlaybackSession>) -> Element {
    let notifier = use_context::<Notifier>();
    let state = session.read().state().clone();
    let external = session.read().external_url();

    let body = match state {
        PlaybackState::Closed => return rsx! {},
        PlaybackState::OptionsShown { song } => rsx! {
            OptionsCard { session, song }
        },
        PlaybackState::ThumbnailShown { song, video_id } => rsx! {
            ThumbnailCard { session, song, video_id }
        },
        PlaybackState::EmbedShown {
            song,
            video_id,
            muted,
        } => rsx! {
            EmbedCard { session, song, video_id, muted }
        },
        PlaybackState::PreviewShown { song, preview_url } => rsx! {
            PreviewCard { session, song, preview_url }
        },
    };

    rsx! {
        section { class: "playback-panel",
            button {
                class: "playback-close",
                aria_label: "Close",
                onclick: move |_| stop_all(session, notifier),
                Icon { name: "x".to_string(), class: "w-5 h-5".to_string() }
            }
            {body}
            if let Some(url) = external {
                button {
                    class: "playback-external",
                    onclick: move |_| {
                        open_external(&url);
                        notifier.send(
                            NotificationKind::Success,
                            "Opened in New Tab",
                            "Song opened in external app",
                        );
                    },
                    Icon { name: "external".to_string(), class: "w-4 h-4".to_string() }
                    span { "Open in New Tab" }
                }
            }
        }
    }
}

#[component]
fn OptionsCard(session: Signal<PlaybackSession>, song: Song) -> Element {
    let notifier = use_context::<Notifier>();
    let options = PlaybackOptions::for_song(&song);
    let spotify_url = options.spotify_id.as_deref().map(spotify_track_url);
    let has_preview = options.preview_url.is_some();
    let title = song.title.clone();
    let artist = song.artist.clone();

    rsx! {
        div { class: "playback-options",
            h3 { class: "playback-heading", "{song.title}" }
            p { class: "playback-subheading", "{song.artist}" }

            div { class: "option-grid",
                if let Some(video_id) = options.video_id {
                    button {
                        class: "option-btn option-youtube",
                        onclick: move |_| open_youtube(notifier, &video_id),
                        Icon { name: "youtube".to_string(), class: "w-5 h-5".to_string() }
                        span { "Open YouTube" }
                    }
                    button {
                        class: "option-btn",
                        onclick: move |_| {
                            transition(session, PlaybackSession::show_thumbnail);
                        },
                        Icon { name: "image".to_string(), class: "w-5 h-5".to_string() }
                        span { "Preview Video" }
                    }
                    button {
                        class: "option-btn",
                        onclick: move |_| {
                            if transition(session, PlaybackSession::embed) {
                                notifier.info("Loading Video", "Embedding video player...");
                            }
                        },
                        Icon { name: "play".to_string(), class: "w-5 h-5".to_string() }
                        span { "Try Embed" }
                    }
                }
                if has_preview {
                    button {
                        class: "option-btn option-preview",
                        onclick: move |_| {
                            transition(session, PlaybackSession::play_preview);
                        },
                        Icon { name: "headphones".to_string(), class: "w-5 h-5".to_string() }
                        span { "Play Preview" }
                    }
                }
                if let Some(url) = spotify_url {
                    button {
                        class: "option-btn option-spotify",
                        onclick: move |_| {
                            open_external(&url);
                            notifier.send(
                                NotificationKind::Success,
                                "Opening Spotify",
                                "Song opened in Spotify",
                            );
                        },
                        Icon { name: "spotify".to_string(), class: "w-5 h-5".to_string() }
                        span { "Open Spotify" }
                    }
                }
            }

            if let Some(search_url) = options.demo_search {
                div { class: "demo-options",
                    p { class: "demo-note",
                        Icon { name: "info".to_string(), class: "w-4 h-4".to_string() }
                        "This is sample data. Connect the YouTube or Spotify APIs to play real music."
                    }
                    div { class: "option-grid",
                        button {
                            class: "option-btn option-youtube",
                            onclick: move |_| {
                                open_external(&search_url);
                                notifier.info("YouTube Search", "Search opened in new tab");
                            },
                            Icon { name: "search".to_string(), class: "w-5 h-5".to_string() }
                            span { "Search YouTube" }
                        }
                        button {
                            class: "option-btn",
                            onclick: move |_| show_demo_info(notifier, title.clone(), artist.clone()),
                            Icon { name: "book".to_string(), class: "w-5 h-5".to_string() }
                            span { "Learn More" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ThumbnailCard(session: Signal<PlaybackSession>, song: Song, video_id: String) -> Element {
    let notifier = use_context::<Notifier>();
    let mut quality = use_signal(|| ThumbnailQuality::MaxRes);
    let thumbnail = youtube_thumbnail_url(&video_id, quality());

    rsx! {
        div { class: "playback-thumbnail",
            div { class: "thumbnail-frame",
                img {
                    src: "{thumbnail}",
                    alt: "{song.title}",
                    // maxresdefault is missing for many uploads
                    onerror: move |_| quality.set(ThumbnailQuality::High),
                }
                button {
                    class: "thumbnail-play",
                    aria_label: "Play video",
                    onclick: move |_| {
                        if transition(session, PlaybackSession::embed) {
                            notifier.info("Loading Video", "Embedding video player...");
                        }
                    },
                    Icon { name: "play".to_string(), class: "w-10 h-10".to_string() }
                }
            }
            h3 { class: "playback-heading", "{song.title}" }
            p { class: "playback-subheading", "{song.artist}" }
            div { class: "option-grid",
                button {
                    class: "option-btn",
                    onclick: move |_| {
                        transition(session, |session| session.back_to_options().map(silence));
                    },
                    Icon { name: "arrow-left".to_string(), class: "w-5 h-5".to_string() }
                    span { "Back" }
                }
                button {
                    class: "option-btn option-youtube",
                    onclick: move |_| open_youtube(notifier, &video_id),
                    Icon { name: "youtube".to_string(), class: "w-5 h-5".to_string() }
                    span { "Open YouTube" }
                }
            }
        }
    }
}

#[component]
fn EmbedCard(session: Signal<PlaybackSession>, song: Song, video_id: String, muted: bool) -> Element {
    let notifier = use_context::<Notifier>();
    let embed_url = session.read().embed_url().unwrap_or_default();

    rsx! {
        div { class: "playback-embed",
            h3 { class: "playback-heading", "{song.title}" }
            p { class: "playback-subheading", "{song.artist}" }
            div { class: "video-frame",
                iframe {
                    src: "{embed_url}",
                    title: "{song.title}",
                    "allow": "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share",
                    allowfullscreen: true,
                    onload: move |_| {
                        notifier.send(
                            NotificationKind::Success,
                            "Video Loaded",
                            "Video is playing! If muted, click Enable Sound button.",
                        );
                    },
                    onerror: {
                        let video_id = video_id.clone();
                        move |_| {
                            warn!(%video_id, "embedded video failed to load");
                            notifier.notify_after(
                                VIDEO_ISSUE_DELAY,
                                Notice::new(
                                    NotificationKind::Warning,
                                    "Video Issue",
                                    "Click \"Open YouTube\" for best experience",
                                ),
                            );
                        }
                    },
                }
            }
            div { class: "video-controls",
                if muted {
                    button {
                        class: "option-btn",
                        onclick: move |_| {
                            transition(session, PlaybackSession::unmute);
                        },
                        Icon { name: "volume".to_string(), class: "w-5 h-5".to_string() }
                        span { "Enable Sound" }
                    }
                }
                button {
                    class: "option-btn option-youtube",
                    onclick: move |_| open_youtube(notifier, &video_id),
                    Icon { name: "youtube".to_string(), class: "w-5 h-5".to_string() }
                    span { "Open YouTube" }
                }
                button {
                    class: "option-btn option-stop",
                    onclick: move |_| stop_all(session, notifier),
                    Icon { name: "stop".to_string(), class: "w-5 h-5".to_string() }
                    span { "Stop" }
                }
            }
            p { class: "video-help",
                Icon { name: "info".to_string(), class: "w-4 h-4".to_string() }
                "If the video shows \"unavailable\", use \"Open YouTube\" instead."
            }
        }
    }
}

#[component]
fn PreviewCard(session: Signal<PlaybackSession>, song: Song, preview_url: String) -> Element {
    let notifier = use_context::<Notifier>();

    // Runs once the audio element is in the document.
    {
        let now_playing = format!("{} - {} (Preview)", song.title, song.artist);
        use_effect(move || {
            let now_playing = now_playing.clone();
            spawn(async move {
                match start_preview().await {
                    Ok(()) => notifier.send(NotificationKind::Music, "Now Playing", now_playing),
                    Err(err) => {
                        warn!(error = %err, "preview autoplay refused");
                        notifier.info("Click Play", "Please click the play button on the audio player");
                    }
                }
            });
        });
    }

    rsx! {
        div { class: "playback-preview",
            h3 { class: "playback-heading", "Now Playing: {song.title}" }
            p { class: "playback-subheading", "{song.artist} (30 Second Preview)" }
            audio {
                id: PREVIEW_AUDIO_ID,
                src: "{preview_url}",
                controls: true,
                preload: "auto",
                onended: move |_| {
                    if transition(session, PlaybackSession::preview_ended) {
                        notifier.info("Preview Ended", "Try the full song on Spotify!");
                    }
                },
            }
            button {
                class: "option-btn option-stop",
                onclick: move |_| stop_all(session, notifier),
                Icon { name: "stop".to_string(), class: "w-5 h-5".to_string() }
                span { "Stop" }
            }
        }
    }
}
