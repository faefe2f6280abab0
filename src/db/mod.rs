use crate::api::Mood;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const SETTINGS_KEY: &str = "sangam.app_settings";

#[cfg(not(target_arch = "wasm32"))]
const SETTINGS_ROW: &str = "app_settings";

/// Error type for settings persistence
#[derive(Debug, Error)]
pub enum DbError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[cfg(not(target_arch = "wasm32"))]
    #[error("could not prepare data directory: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(target_arch = "wasm32")]
    #[error("storage error: {0}")]
    Storage(#[from] gloo_storage::errors::StorageError),
    #[error("malformed settings: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Client settings; each field falls back to its default when missing from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub api_base_url: String,
    pub health_timeout_ms: u64,
    pub notification_duration_ms: u64,
    pub search_limit: u32,
    pub default_mood: Mood,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: "/api".to_string(),
            health_timeout_ms: 5000,
            notification_duration_ms: 5000,
            search_limit: 10,
            default_mood: Mood::Happy,
        }
    }
}

impl AppSettings {
    /// Clamp values edited by hand into something usable.
    pub fn sanitized(mut self) -> Self {
        let base = self.api_base_url.trim();
        self.api_base_url = if base.is_empty() {
            Self::default().api_base_url
        } else {
            base.to_string()
        };
        self.health_timeout_ms = self.health_timeout_ms.clamp(500, 30_000);
        self.notification_duration_ms = self.notification_duration_ms.clamp(1000, 30_000);
        self.search_limit = self.search_limit.clamp(1, 50);
        self
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn save_settings(settings: AppSettings) -> Result<(), DbError> {
    let conn = get_db_connection()?;
    save_settings_to(&conn, &settings)
}

#[cfg(target_arch = "wasm32")]
pub async fn save_settings(settings: AppSettings) -> Result<(), DbError> {
    LocalStorage::set(SETTINGS_KEY, settings)?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn load_settings() -> Result<AppSettings, DbError> {
    let conn = get_db_connection()?;
    load_settings_from(&conn)
}

#[cfg(target_arch = "wasm32")]
pub async fn load_settings() -> Result<AppSettings, DbError> {
    match LocalStorage::get::<AppSettings>(SETTINGS_KEY) {
        Ok(settings) => Ok(settings.sanitized()),
        Err(_) => Ok(AppSettings::default()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn initialize_database() -> Result<(), DbError> {
    let conn = get_db_connection()?;
    create_tables(&conn)
}

#[cfg(target_arch = "wasm32")]
pub async fn initialize_database() -> Result<(), DbError> {
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn create_tables(conn: &rusqlite::Connection) -> Result<(), DbError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn save_settings_to(conn: &rusqlite::Connection, settings: &AppSettings) -> Result<(), DbError> {
    let settings_json = serde_json::to_string(settings)?;
    conn.execute(
        "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
        [SETTINGS_ROW, settings_json.as_str()],
    )?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn load_settings_from(conn: &rusqlite::Connection) -> Result<AppSettings, DbError> {
    use rusqlite::OptionalExtension;

    let json: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key = ?1",
            [SETTINGS_ROW],
            |row| row.get(0),
        )
        .optional()?;

    match json {
        Some(json) => Ok(serde_json::from_str::<AppSettings>(&json)?.sanitized()),
        None => Ok(AppSettings::default()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn get_db_connection() -> Result<rusqlite::Connection, DbError> {
    let data_dir = dirs::data_dir()
        .map(|dir| dir.join("sangam"))
        .unwrap_or_else(|| std::path::PathBuf::from(".sangam"));
    std::fs::create_dir_all(&data_dir)?;

    let conn = rusqlite::Connection::open(data_dir.join("sangam.db"))?;
    create_tables(&conn)?;
    Ok(conn)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn memory_db() -> rusqlite::Connection {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        conn
    }

    #[test]
    fn missing_row_gives_defaults() {
        let conn = memory_db();
        assert_eq!(load_settings_from(&conn).unwrap(), AppSettings::default());
    }

    #[test]
    fn settings_round_trip() {
        let conn = memory_db();
        let settings = AppSettings {
            api_base_url: "https://sangam.example.com/api".to_string(),
            search_limit: 20,
            default_mood: Mood::Devotional,
            ..AppSettings::default()
        };
        save_settings_to(&conn, &settings).unwrap();
        assert_eq!(load_settings_from(&conn).unwrap(), settings);
    }

    #[test]
    fn partial_json_fills_defaults_and_clamps() {
        let conn = memory_db();
        conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)",
            [SETTINGS_ROW, r#"{"search_limit": 500, "api_base_url": "  "}"#],
        )
        .unwrap();

        let loaded = load_settings_from(&conn).unwrap();
        assert_eq!(loaded.search_limit, 50);
        assert_eq!(loaded.api_base_url, "/api");
        assert_eq!(loaded.health_timeout_ms, 5000);
        assert_eq!(loaded.default_mood, Mood::Happy);
    }

    #[test]
    fn corrupt_row_is_an_error() {
        let conn = memory_db();
        conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)",
            [SETTINGS_ROW, "not json"],
        )
        .unwrap();
        assert!(matches!(load_settings_from(&conn), Err(DbError::Serde(_))));
    }
}
