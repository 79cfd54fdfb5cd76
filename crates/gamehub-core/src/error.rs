//! Error types for listing fetches and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain a game's file listing.
///
/// The loader never propagates these; it turns them into the error state
/// of the affected container.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to read response from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("response from {url} is not valid JSON: {source}")]
    InvalidJson {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid base URL '{base}': {source}")]
    BadUrl {
        base: String,
        #[source]
        source: url::ParseError,
    },
    /// Failures raised by non-HTTP sources.
    #[error("{0}")]
    Other(String),
}

/// Failure to load `config.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("could not determine home directory")]
    NoHome,
}
