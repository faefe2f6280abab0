use crate::api::Mood;
use crate::components::{AppView, Icon};
use crate::provider::Availability;
use dioxus::prelude::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "search",
        title: "Search Artists",
        body: "Find songs by your favourite Indian artists, from playback legends to indie voices.",
    },
    Feature {
        icon: "music",
        title: "Browse by Mood",
        body: "Happy, romantic, devotional or classical: pick a mood and get a list to match.",
    },
    Feature {
        icon: "youtube",
        title: "Play Anywhere",
        body: "Watch on YouTube, embed the video here, or listen to a Spotify preview.",
    },
];

#[component]
pub fn HomeView() -> Element {
    let availability = use_context::<Signal<Availability>>();
    let demo_mode = matches!(availability(), Availability::Offline);

    rsx! {
        div { class: "home-page",
            section { class: "hero",
                h1 { class: "hero-title", "Sangam" }
                p { class: "hero-subtitle",
                    "Discover amazing Indian music, one artist or mood at a time."
                }
                div { class: "hero-actions",
                    Link { class: "btn-primary", to: AppView::MusicView {},
                        Icon { name: "play".to_string(), class: "w-5 h-5".to_string() }
                        span { "Start Listening" }
                    }
                    Link { class: "btn-secondary", to: AppView::GuideView {},
                        Icon { name: "book".to_string(), class: "w-5 h-5".to_string() }
                        span { "How to Use" }
                    }
                }
                if demo_mode {
                    p { class: "hero-note",
                        Icon { name: "info".to_string(), class: "w-4 h-4".to_string() }
                        "The music API is offline, so sample songs are shown."
                    }
                }
            }

            section { class: "feature-grid",
                for feature in FEATURES.iter() {
                    div { key: "{feature.title}", class: "feature-card",
                        Icon { name: feature.icon.to_string(), class: "w-8 h-8".to_string() }
                        h3 { "{feature.title}" }
                        p { "{feature.body}" }
                    }
                }
            }

            section { class: "mood-preview",
                h2 { class: "section-title", "Moods" }
                div { class: "mood-chips",
                    for mood in Mood::ALL {
                        span { key: "{mood.token()}", class: "mood-chip", "{mood.label()}" }
                    }
                }
            }
        }
    }
}
