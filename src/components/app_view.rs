//! Defines the application routes.

use crate::components::views::{GuideView, HomeView, MusicView, SettingsView};
use crate::components::AppShell;
use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum AppView {
    #[layout(AppShell)]
        #[route("/")]
        HomeView {},
        #[route("/music")]
        MusicView {},
        #[route("/guide")]
        GuideView {},
        #[route("/settings")]
        SettingsView {},
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::HomeView {} => "Home",
        AppView::MusicView {} => "Discover",
        AppView::GuideView {} => "How to Use",
        AppView::SettingsView {} => "Settings",
    }
}

pub fn view_icon(view: &AppView) -> &'static str {
    match view {
        AppView::HomeView {} => "home",
        AppView::MusicView {} => "music",
        AppView::GuideView {} => "book",
        AppView::SettingsView {} => "settings",
    }
}

pub const NAV_ITEMS: [AppView; 4] = [
    AppView::HomeView {},
    AppView::MusicView {},
    AppView::GuideView {},
    AppView::SettingsView {},
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn routes_round_trip_through_paths() {
        for view in NAV_ITEMS {
            let path = view.to_string();
            assert_eq!(path.parse::<AppView>().ok(), Some(view));
        }
        assert_eq!(AppView::MusicView {}.to_string(), "/music");
    }

    #[test]
    fn labels_are_distinct() {
        let labels: Vec<_> = NAV_ITEMS.iter().map(view_label).collect();
        assert_eq!(labels, vec!["Home", "Discover", "How to Use", "Settings"]);
    }
}
