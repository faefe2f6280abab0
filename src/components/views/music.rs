use crate::api::{Mood, Query, SangamClient, Song};
use crate::components::playback_panel::{select_song, PlaybackPanel};
use crate::components::{Icon, Notifier, SongList};
use crate::db::AppSettings;
use crate::playback::PlaybackSession;
use crate::provider::{artist_query, fetch_songs, wants_auto_search, Availability, ListingState};
use crate::utils::delay;
use dioxus::prelude::*;
use std::time::Duration;
use tracing::debug;

const SEARCH_DEBOUNCE: Duration = Duration::from_millis(1000);

/// Everything a load needs, bundled so event handlers can start one.
#[derive(Clone, Copy)]
struct ListingHandles {
    state: Signal<ListingState>,
    settings: Signal<AppSettings>,
    availability: Signal<Availability>,
    notifier: Notifier,
}

impl ListingHandles {
    fn load(self, query: Query) {
        let mut state = self.state;
        let ticket = state.with_mut(|state| state.begin(&query));

        let settings = self.settings.peek().clone();
        let online = self.availability.peek().is_online();
        let notifier = self.notifier;
        spawn(async move {
            let client = SangamClient::from_settings(&settings);
            let outcome = fetch_songs(&client, online, &query).await;

            match state.with_mut(|state| state.apply(ticket, &outcome)) {
                Some(notice) => notifier.notify(notice),
                None => debug!(?query, "discarding stale listing"),
            }
        });
    }

    fn search(self, raw: &str) {
        match artist_query(raw) {
            Ok(query) => self.load(query),
            Err(notice) => self.notifier.notify(notice),
        }
    }
}

#[component]
pub fn MusicView() -> Element {
    let settings = use_context::<Signal<AppSettings>>();
    let availability = use_context::<Signal<Availability>>();
    let notifier = use_context::<Notifier>();

    let handles = ListingHandles {
        state: use_signal(ListingState::default),
        settings,
        availability,
        notifier,
    };
    let session = use_signal(PlaybackSession::default);

    let mut search_query = use_signal(String::new);
    let debounce_generation = use_signal(|| 0u64);
    let default_loaded = use_signal(|| false);

    // Debounce typing; short queries never search on their own.
    {
        let mut debounce_generation = debounce_generation.clone();
        use_effect(move || {
            let query = search_query();
            debounce_generation.with_mut(|value| *value = value.saturating_add(1));
            let generation = *debounce_generation.peek();

            if !wants_auto_search(&query) {
                return;
            }

            spawn(async move {
                delay(SEARCH_DEBOUNCE).await;
                if *debounce_generation.peek() != generation {
                    return;
                }
                handles.search(&query);
            });
        });
    }

    // Default mood once the availability probe has settled.
    {
        let mut default_loaded = default_loaded.clone();
        use_effect(move || {
            if !availability().is_resolved() || *default_loaded.peek() {
                return;
            }
            default_loaded.set(true);
            let mood = settings.peek().default_mood;
            handles.load(Query::Mood(mood));
        });
    }

    let mut search_now = {
        let mut debounce_generation = debounce_generation.clone();
        move || {
            // Cancel the pending debounced search.
            debounce_generation.with_mut(|value| *value = value.saturating_add(1));
            handles.search(&search_query.peek());
        }
    };

    let on_select = move |song: Song| select_song(session, notifier, song);

    let listing_state = (handles.state)();
    let listing = listing_state.listing().cloned();
    let loading = listing_state.is_loading();
    let active_mood = listing_state.active_mood();

    rsx! {
        div { class: "music-page",
            section { class: "search-section",
                h1 { class: "page-title", "Discover Music" }
                div { class: "search-bar",
                    Icon { name: "search".to_string(), class: "search-icon".to_string() }
                    input {
                        class: "search-input",
                        r#type: "text",
                        placeholder: "Search for an artist (e.g. Arijit Singh)",
                        value: search_query,
                        oninput: move |evt| search_query.set(evt.value()),
                        onkeydown: move |evt| {
                            if evt.key() == Key::Enter {
                                search_now();
                            }
                        },
                    }
                    button { class: "search-btn", onclick: move |_| search_now(), "Search" }
                }
            }

            section { class: "mood-section",
                h2 { class: "section-title", "Browse by Mood" }
                div { class: "mood-grid",
                    for mood in Mood::ALL {
                        button {
                            key: "{mood.token()}",
                            class: if active_mood == Some(mood) { "mood-btn active" } else { "mood-btn" },
                            onclick: move |_| handles.load(Query::Mood(mood)),
                            "{mood.label()}"
                        }
                    }
                }
            }

            PlaybackPanel { session }

            section { class: "results-section",
                if loading {
                    div { class: "loading",
                        Icon { name: "loader".to_string(), class: "w-8 h-8".to_string() }
                        p { "Loading songs..." }
                    }
                } else if let Some(listing) = listing {
                    SongList {
                        title: listing.title,
                        songs: listing.songs,
                        on_select,
                    }
                }
            }
        }
    }
}
