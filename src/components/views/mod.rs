mod guide;
mod home;
mod music;
mod settings;

pub use guide::GuideView;
pub use home::HomeView;
pub use music::MusicView;
pub use settings::SettingsView;
