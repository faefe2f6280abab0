use crate::components::{AppView, Icon};
use dioxus::prelude::*;

#[component]
pub fn GuideView() -> Element {
    rsx! {
        div { class: "guide-page",
            h1 { class: "page-title", "How to Use" }

            section { class: "guide-section",
                h2 { "Finding music" }
                ol {
                    li { "Open the Discover page and type an artist name. Results appear after you stop typing, or press Enter." }
                    li { "Pick a mood to load a list for that mood." }
                    li { "Press play on a song to choose how to listen." }
                }
            }

            section { class: "guide-section",
                h2 { "Playback options" }
                ul {
                    li {
                        Icon { name: "youtube".to_string(), class: "w-4 h-4".to_string() }
                        " Open YouTube always works. Try Embed plays the video on this page, muted at first; use Enable Sound to hear it."
                    }
                    li {
                        Icon { name: "headphones".to_string(), class: "w-4 h-4".to_string() }
                        " Play Preview plays a 30 second Spotify clip when one is available."
                    }
                    li {
                        Icon { name: "spotify".to_string(), class: "w-4 h-4".to_string() }
                        " Open Spotify opens the full track in Spotify."
                    }
                }
            }

            section { class: "guide-section",
                h2 { "Connecting the music API" }
                p {
                    "Without the backend, Sangam runs in demo mode with sample songs. To get real results, run the API with these environment variables:"
                }
                pre { class: "guide-code",
                    "YOUTUBE_API_KEY=your_youtube_key\nSPOTIFY_CLIENT_ID=your_client_id\nSPOTIFY_CLIENT_SECRET=your_client_secret"
                }
                p {
                    "Then point the API base URL at it on the "
                    Link { to: AppView::SettingsView {}, "Settings" }
                    " page and check the connection."
                }
            }
        }
    }
}
