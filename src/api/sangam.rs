use crate::api::error::ApiError;
use crate::api::models::*;
use crate::db::AppSettings;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use tracing::debug;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_ORIGIN: &str = "http://127.0.0.1:5000";

/// The remote catalogue boundary. Provider logic depends on this seam only.
#[allow(async_fn_in_trait)]
pub trait MusicApi {
    async fn health(&self) -> Result<HealthReport, ApiError>;
    async fn search_artist(&self, artist: &str) -> Result<Vec<Song>, ApiError>;
    async fn mood_songs(&self, mood: Mood) -> Result<Vec<Song>, ApiError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct SangamClient {
    base_url: String,
    search_limit: u32,
}

impl SangamClient {
    pub fn new(base_url: &str, search_limit: u32) -> Self {
        Self {
            base_url: resolve_base_url(base_url),
            search_limit: search_limit.max(1),
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(&settings.api_base_url, settings.search_limit)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }

    pub fn search_url(&self, artist: &str) -> String {
        format!(
            "{}/search/{}?limit={}",
            self.base_url,
            urlencoding::encode(artist.trim()),
            self.search_limit
        )
    }

    pub fn mood_url(&self, mood: Mood) -> String {
        format!("{}/mood/{}", self.base_url, mood.token())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!(%url, "GET");
        let response = HTTP_CLIENT.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Payload(e.to_string()))
    }

    async fn get_songs(&self, url: &str) -> Result<Vec<Song>, ApiError> {
        let json: SongsResponse = self.get_json(url).await?;
        if !json.success {
            return Err(ApiError::Reported(
                json.error
                    .unwrap_or_else(|| "response reported failure".to_string()),
            ));
        }
        Ok(json.songs)
    }
}

impl MusicApi for SangamClient {
    async fn health(&self) -> Result<HealthReport, ApiError> {
        let report: HealthReport = self.get_json(&self.health_url()).await?;
        if report.success == Some(false) {
            return Err(ApiError::Reported(
                report
                    .message
                    .unwrap_or_else(|| "health check reported failure".to_string()),
            ));
        }
        Ok(report)
    }

    async fn search_artist(&self, artist: &str) -> Result<Vec<Song>, ApiError> {
        self.get_songs(&self.search_url(artist)).await
    }

    async fn mood_songs(&self, mood: Mood) -> Result<Vec<Song>, ApiError> {
        self.get_songs(&self.mood_url(mood)).await
    }
}

/// Makes a configured base URL absolute and strips the trailing slash.
pub fn resolve_base_url(configured: &str) -> String {
    let trimmed = configured.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return trimmed.to_string();
    }

    let path = if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    };
    format!("{}{}", page_origin(), path)
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> String {
    NATIVE_ORIGIN.to_string()
}
