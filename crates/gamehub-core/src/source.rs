//! Where file listings come from.
//!
//! [`FileListSource`] is the seam between the loader and the network.
//! [`HttpFileListSource`] talks to the site backend; tests substitute
//! in-memory sources.
//!
//! # Dyn-compatibility
//!
//! `fetch_files` returns a boxed future instead of `impl Future` so that
//! `&dyn FileListSource` works and the binary can pick a source at runtime.

use std::collections::BTreeMap;

use futures_util::future::BoxFuture;
use reqwest::Client;
use url::Url;

use crate::config::Config;
use crate::error::LoadError;
use crate::files::{FileDescriptor, parse_listing};
use crate::game::{GameId, GameInfo};

/// Supplies the file listing for a game.
pub trait FileListSource: Send + Sync {
    /// Fetch the current files for `game`, in backend order.
    ///
    /// An `Ok` empty vec means the backend has nothing for this game.
    fn fetch_files<'a>(
        &'a self,
        game: GameId,
    ) -> BoxFuture<'a, Result<Vec<FileDescriptor>, LoadError>>;
}

/// Listing source backed by the site's JSON API.
#[derive(Debug, Clone)]
pub struct HttpFileListSource {
    client: Client,
    base_url: Url,
    cache_bust: bool,
}

impl HttpFileListSource {
    /// Source with default client settings and cache-busting enabled.
    pub fn new(base_url: &str) -> Result<Self, LoadError> {
        let client = Client::builder().build().map_err(LoadError::Client)?;
        Ok(Self {
            client,
            base_url: parse_base(base_url)?,
            cache_bust: true,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, LoadError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(LoadError::Client)?;
        Ok(Self {
            client,
            base_url: parse_base(&config.base_url)?,
            cache_bust: config.cache_bust,
        })
    }

    /// `{base}/api/files/{game}`, with `t={now_millis}` when cache-busting.
    pub fn listing_url(&self, game: GameId, now_millis: i64) -> Url {
        let mut url = self.endpoint(&format!("api/files/{}", game.as_str()));
        if self.cache_bust {
            url.query_pairs_mut()
                .append_pair("t", &now_millis.to_string());
        }
        url
    }

    /// Fetch the game catalog from `/api/games`.
    pub async fn fetch_catalog(&self) -> Result<BTreeMap<String, GameInfo>, LoadError> {
        let url = self.endpoint("api/games");
        let body = self.get_text(url.clone()).await?;
        serde_json::from_str(&body).map_err(|source| LoadError::InvalidJson {
            url: url.to_string(),
            source,
        })
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        // Only cannot-be-a-base URLs (e.g. `mailto:`) have no segments.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
            segments.extend(path.split('/'));
        }
        url
    }

    async fn get_text(&self, url: Url) -> Result<String, LoadError> {
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| LoadError::Request {
                url: url.to_string(),
                source: source.without_url(),
            })?;

        // Error statuses still carry a JSON body; the body decides the state.
        if !response.status().is_success() {
            log::warn!("HTTP {} from {}", response.status(), url);
        }

        response.text().await.map_err(|source| LoadError::Body {
            url: url.to_string(),
            source: source.without_url(),
        })
    }
}

impl FileListSource for HttpFileListSource {
    fn fetch_files<'a>(
        &'a self,
        game: GameId,
    ) -> BoxFuture<'a, Result<Vec<FileDescriptor>, LoadError>> {
        Box::pin(async move {
            let url = self.listing_url(game, chrono::Utc::now().timestamp_millis());
            let body = self.get_text(url.clone()).await?;
            parse_listing(&body).map_err(|source| LoadError::InvalidJson {
                url: url.to_string(),
                source,
            })
        })
    }
}

fn parse_base(base: &str) -> Result<Url, LoadError> {
    let mut normalized = base.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Url::parse(&normalized).map_err(|source| LoadError::BadUrl {
        base: base.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use std::sync::{Arc, Mutex};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned response per connection and record request lines.
    async fn spawn_backend(
        status: &'static str,
        body: &'static str,
    ) -> (SocketAddr, Arc<Mutex<Vec<String>>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);

        tokio::spawn(async move {
            loop {
                let (mut stream, _) = listener.accept().await.unwrap();
                let log = Arc::clone(&log);
                tokio::spawn(async move {
                    let mut buf = vec![0u8; 4096];
                    let n = stream.read(&mut buf).await.unwrap_or(0);
                    let request = String::from_utf8_lossy(&buf[..n]).to_string();
                    if let Some(line) = request.lines().next() {
                        log.lock().unwrap().push(line.to_string());
                    }
                    let response = format!(
                        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    let _ = stream.write_all(response.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });

        (addr, seen)
    }

    #[test]
    fn listing_url_has_cache_buster() {
        let source = HttpFileListSource::new("http://127.0.0.1:5000").unwrap();
        let url = source.listing_url(GameId::Ddnet, 1_700_000_000_123);
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:5000/api/files/ddnet?t=1700000000123"
        );
    }

    #[test]
    fn listing_url_keeps_path_prefix() {
        let source = HttpFileListSource::new("https://example.org/hub/").unwrap();
        let url = source.listing_url(GameId::Cs2, 5);
        assert_eq!(url.as_str(), "https://example.org/hub/api/files/cs2?t=5");
    }

    #[test]
    fn listing_url_without_cache_bust() {
        let config = Config {
            cache_bust: false,
            ..Config::default()
        };
        let source = HttpFileListSource::from_config(&config).unwrap();
        let url = source.listing_url(GameId::Minecraft, 99);
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/api/files/minecraft");
    }

    #[test]
    fn bad_base_url_is_rejected() {
        let err = HttpFileListSource::new("not a url").unwrap_err();
        assert!(matches!(err, LoadError::BadUrl { .. }));
    }

    #[tokio::test]
    async fn fetches_and_parses_files() {
        let (addr, seen) = spawn_backend(
            "200 OK",
            r#"{"files":[{"name":"a.cfg","size":12,"size_human":"12.0 B","modified":"2024-01-01 00:00","url":"/download/cs2/a.cfg"}]}"#,
        )
        .await;
        let source = HttpFileListSource::new(&format!("http://{}", addr)).unwrap();

        let files = source.fetch_files(GameId::Cs2).await.unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "a.cfg");

        let lines = seen.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("GET /api/files/cs2?t="));
    }

    #[tokio::test]
    async fn not_found_json_is_empty_not_error() {
        let (addr, _) = spawn_backend("404 Not Found", r#"{"error":"Game not found"}"#).await;
        let source = HttpFileListSource::new(&format!("http://{}", addr)).unwrap();
        let files = source.fetch_files(GameId::Ddnet).await.unwrap();
        assert!(files.is_empty());
    }

    #[tokio::test]
    async fn html_body_is_invalid_json() {
        let (addr, _) = spawn_backend("500 Internal Server Error", "<h1>oops</h1>").await;
        let source = HttpFileListSource::new(&format!("http://{}", addr)).unwrap();
        let err = source.fetch_files(GameId::Ddnet).await.unwrap_err();
        assert!(matches!(err, LoadError::InvalidJson { .. }));
    }

    #[tokio::test]
    async fn connection_refused_is_request_error() {
        // Bind then drop to get a port nothing listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = HttpFileListSource::new(&format!("http://{}", addr)).unwrap();
        let err = source.fetch_files(GameId::Minecraft).await.unwrap_err();
        assert!(matches!(err, LoadError::Request { .. }));
        let msg = err.to_string();
        assert_eq!(msg.matches("/api/files/minecraft").count(), 1, "{}", msg);
    }

    #[tokio::test]
    async fn null_body_is_invalid_json() {
        let (addr, _) = spawn_backend("200 OK", "null").await;
        let source = HttpFileListSource::new(&format!("http://{}", addr)).unwrap();
        let err = source.fetch_files(GameId::Cs2).await.unwrap_err();
        assert!(matches!(err, LoadError::InvalidJson { .. }));
    }

    #[tokio::test]
    async fn fetches_catalog() {
        let (addr, seen) = spawn_backend(
            "200 OK",
            r#"{"cs2":{"name":"CS 2","description":"Shooter","icon":"cs2.png"},"ddnet":{"name":"DDNet","description":"Teeworlds mod","icon":"ddnet.png"}}"#,
        )
        .await;
        let source = HttpFileListSource::new(&format!("http://{}", addr)).unwrap();
        let catalog = source.fetch_catalog().await.unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog["cs2"].icon, "cs2.png");
        assert_eq!(seen.lock().unwrap()[0], "GET /api/games HTTP/1.1");
    }
}
