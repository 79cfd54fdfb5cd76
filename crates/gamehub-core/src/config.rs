//! Configuration loaded from `config.toml` in the GameHub home directory.
//!
//! Home resolution: explicit path > `GAMEHUB_HOME` env var > `~/.gamehub`.
//! A missing file means defaults; a malformed one is an error.
//! Command-line overrides merge on top via [`Config::merge_with`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::GameId;
use crate::render::Labels;

pub const CONFIG_FILE: &str = "config.toml";

// ============================================================================
// Default Functions
// ============================================================================

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_games() -> Vec<GameId> {
    GameId::ALL.to_vec()
}

fn default_cache_bust() -> bool {
    true
}

// ============================================================================
// Configuration Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Backend origin, e.g. `http://127.0.0.1:5000`. A path prefix is allowed.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Games to load, in processing order.
    #[serde(default = "default_games")]
    pub games: Vec<GameId>,
    /// Append `t=<epoch millis>` to listing requests to defeat caches.
    #[serde(default = "default_cache_bust")]
    pub cache_bust: bool,
    /// Per-request timeout. Unset means the HTTP client's default.
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,
    #[serde(default)]
    pub labels: Labels,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            games: default_games(),
            cache_bust: default_cache_bust(),
            request_timeout_seconds: None,
            labels: Labels::default(),
        }
    }
}

/// Overrides supplied at invocation time (highest priority).
#[derive(Debug, Clone, Default)]
pub struct ConfigOverride {
    pub base_url: Option<String>,
    pub games: Option<Vec<GameId>>,
    pub cache_bust: Option<bool>,
    pub request_timeout_seconds: Option<u64>,
}

impl Config {
    /// Load `<home>/config.toml`, falling back to defaults if it doesn't exist.
    pub fn load(home: &Path) -> Result<Self, ConfigError> {
        let path = home.join(CONFIG_FILE);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io { path, source }),
        }
    }

    pub fn merge_with(&self, other: &ConfigOverride) -> Self {
        Self {
            base_url: other
                .base_url
                .clone()
                .unwrap_or_else(|| self.base_url.clone()),
            games: other.games.clone().unwrap_or_else(|| self.games.clone()),
            cache_bust: other.cache_bust.unwrap_or(self.cache_bust),
            request_timeout_seconds: other
                .request_timeout_seconds
                .or(self.request_timeout_seconds),
            labels: self.labels.clone(),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }
}

/// Resolve the GameHub home directory.
///
/// Precedence:
/// 1. `explicit` (e.g. `--home`)
/// 2. `GAMEHUB_HOME` environment variable
/// 3. `~/.gamehub`
pub fn resolve_home(explicit: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    if let Some(home) = explicit {
        return Ok(home);
    }
    if let Ok(home) = std::env::var("GAMEHUB_HOME")
        && !home.is_empty()
    {
        return Ok(PathBuf::from(home));
    }
    dirs_next::home_dir()
        .map(|home| home.join(".gamehub"))
        .ok_or(ConfigError::NoHome)
}
