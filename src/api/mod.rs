//! Client for the Sangam catalogue API and its wire models.

pub mod error;
pub mod links;
pub mod models;
mod sangam;

pub use error::ApiError;
pub use models::*;
pub use sangam::{resolve_base_url, MusicApi, SangamClient};
