use dioxus::prelude::*;

mod api;
mod components;
mod db;
mod diagnostics;
mod notifications;
mod playback;
mod provider;
mod sample_data;
mod utils;

use components::AppView;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "theme-color", content: "#667eea" }
        document::Meta { name: "description", content: "Discover amazing Indian music" }

        document::Stylesheet { href: APP_CSS }

        Router::<AppView> {}
    }
}
