//! Configuration model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{Error, Result};

/// Application configuration.
///
/// Loaded once at startup and passed into the client and store
/// constructors; nothing reads configuration ambiently after that.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// TMDB configuration.
    pub tmdb: TmdbConfig,
    /// Path of the SQLite database file.
    pub db_path: Option<PathBuf>,
}

/// TMDB configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TmdbConfig {
    /// API base URL.
    pub api_url: String,
    /// Poster image base URL (includes the size segment).
    pub image_url: String,
    /// API key (v3), used for image downloads.
    pub api_key: Option<String>,
    /// Read access token (v4), used as a Bearer header.
    pub read_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tmdb: TmdbConfig::default(),
            db_path: std::env::var("MEDIA_CATALOG_DB").ok().map(PathBuf::from),
        }
    }
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.themoviedb.org/3".to_string(),
            image_url: "https://image.tmdb.org/t/p/w500".to_string(),
            api_key: std::env::var("TMDB_API_KEY").ok(),
            read_token: std::env::var("TMDB_READ_TOKEN").ok(),
        }
    }
}

impl Config {
    /// Database file path; configuration is incomplete without one.
    pub fn db_path(&self) -> Result<&PathBuf> {
        self.db_path.as_ref().ok_or(Error::DbPathMissing)
    }
}

impl TmdbConfig {
    /// Read access token; required for any API call.
    pub fn read_token(&self) -> Result<&str> {
        self.read_token.as_deref().ok_or(Error::ReadTokenMissing)
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("media_catalog")
}

/// Load configuration from file.
///
/// Values missing from the file fall back to environment variables
/// (`TMDB_API_KEY`, `TMDB_READ_TOKEN`, `MEDIA_CATALOG_DB`).
pub fn load_config() -> Config {
    let config_path = dirs_config_path().join("config.toml");

    if config_path.exists() {
        if let Ok(content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str(&content) {
                return config;
            }
        }
    }

    Config::default()
}
