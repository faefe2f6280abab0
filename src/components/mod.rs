//! The components module contains all shared components for our app.

mod app;
mod app_view;
mod icons;
pub mod media;
mod notifier;
pub mod playback_panel;
mod song_list;
pub mod views;

pub use app::*;
pub use app_view::*;
pub use icons::*;
pub use notifier::*;
pub use song_list::*;
// Views are accessed via views::ViewName
