//! RetroAchievements API client.
//!
//! Async HTTP client using `reqwest`. The Web API is authenticated through
//! the `y` query parameter; badge images live on a separate media host.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::debug;

use crate::types::GameInfo;

const DEFAULT_API_BASE: &str = "https://retroachievements.org/API";
const DEFAULT_MEDIA_BASE: &str = "https://media.retroachievements.org";

/// The media host rejects requests without a browser-like User-Agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from the RetroAchievements client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// RetroAchievements Web API client.
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    api_base: String,
    media_base: String,
}

impl Client {
    /// Creates a new client with the given Web API key.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_key: api_key.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            media_base: DEFAULT_MEDIA_BASE.to_string(),
        })
    }

    /// Sets custom API and media base URLs (for testing).
    #[cfg(test)]
    pub(crate) fn with_base_urls(mut self, api: String, media: String) -> Self {
        self.api_base = api;
        self.media_base = media;
        self
    }

    /// Fetches metadata for a single game.
    pub async fn get_game(&self, game_id: u32) -> Result<GameInfo, Error> {
        let url = format!("{}/API_GetGame.php", self.api_base);
        let id = game_id.to_string();
        let resp = self
            .http
            .get(&url)
            .query(&[("y", self.api_key.as_str()), ("i", id.as_str())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.bytes().await?;
        let game: GameInfo = serde_json::from_slice(&body)?;
        debug!(game_id, title = %game.title, "fetched game metadata");
        Ok(game)
    }

    /// Downloads a badge image from the media host.
    ///
    /// `icon_path` is the relative path from [`GameInfo::icon_path`],
    /// e.g. `/Images/085573.png`.
    pub async fn get_icon(&self, icon_path: &str) -> Result<Vec<u8>, Error> {
        let url = format!("{}{icon_path}", self.media_base);
        let resp = self.http.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                body: "image download failed".into(),
            });
        }

        Ok(resp.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Starts a mock HTTP server that responds once with the given status,
    /// content type and body, and captures the request head.
    async fn mock_server(
        status: u16,
        content_type: &str,
        body: Vec<u8>,
    ) -> (
        String,
        tokio::task::JoinHandle<()>,
        tokio::sync::oneshot::Receiver<String>,
    ) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let url = format!("http://127.0.0.1:{port}");
        let content_type = content_type.to_string();
        let (req_tx, req_rx) = tokio::sync::oneshot::channel();

        let handle = tokio::spawn(async move {
            if let Ok((mut stream, _)) = listener.accept().await {
                let mut buf = vec![0u8; 8192];
                let n = stream.read(&mut buf).await.unwrap_or(0);
                let _ = req_tx.send(String::from_utf8_lossy(&buf[..n]).into_owned());

                let head = format!(
                    "HTTP/1.1 {status} X\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    body.len(),
                );
                let _ = stream.write_all(head.as_bytes()).await;
                let _ = stream.write_all(&body).await;
                let _ = stream.shutdown().await;
            }
        });

        (url, handle, req_rx)
    }

    fn test_client(api: String, media: String) -> Client {
        Client::new("test-key").unwrap().with_base_urls(api, media)
    }

    #[tokio::test]
    async fn get_game_parses_metadata() {
        let json = br#"{"ID":1,"Title":"Sonic the Hedgehog","ImageIcon":"/Images/085573.png"}"#;
        let (url, handle, req_rx) = mock_server(200, "application/json", json.to_vec()).await;

        let client = test_client(url.clone(), url);
        let game = client.get_game(1).await.unwrap();

        assert_eq!(game.id, 1);
        assert_eq!(game.title, "Sonic the Hedgehog");
        assert_eq!(game.icon_path(), Some("/Images/085573.png"));

        let request = req_rx.await.unwrap();
        assert!(request.contains("GET /API_GetGame.php?"));
        assert!(request.contains("y=test-key"));
        assert!(request.contains("i=1"));

        handle.abort();
    }

    #[tokio::test]
    async fn get_game_api_error() {
        let (url, handle, _req_rx) = mock_server(404, "text/html", b"not found".to_vec()).await;

        let client = test_client(url.clone(), url);
        let err = client.get_game(99).await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("404"), "error should mention 404: {msg}");

        handle.abort();
    }

    #[tokio::test]
    async fn get_game_malformed_json() {
        let (url, handle, _req_rx) =
            mock_server(200, "application/json", b"<html>maintenance</html>".to_vec()).await;

        let client = test_client(url.clone(), url);
        let err = client.get_game(1).await.unwrap_err();
        assert!(matches!(err, Error::Json(_)));

        handle.abort();
    }

    #[tokio::test]
    async fn get_icon_returns_bytes() {
        let bytes = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 1, 2, 3];
        let (url, handle, req_rx) = mock_server(200, "image/png", bytes.clone()).await;

        let client = test_client(url.clone(), url);
        let data = client.get_icon("/Images/085573.png").await.unwrap();
        assert_eq!(data, bytes);

        let request = req_rx.await.unwrap();
        assert!(request.contains("GET /Images/085573.png"));

        handle.abort();
    }

    #[tokio::test]
    async fn get_icon_download_error() {
        let (url, handle, _req_rx) = mock_server(403, "text/html", b"forbidden".to_vec()).await;

        let client = test_client(url.clone(), url);
        let err = client.get_icon("/Images/000001.png").await.unwrap_err();
        assert!(matches!(err, Error::Api { status: 403, .. }));

        handle.abort();
    }

    #[test]
    fn client_new_succeeds() {
        assert!(Client::new("some-key").is_ok());
    }
}
