//! HTTP page fetcher.
//!
//! Every request is raced against a fixed timeout; there is no retry.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::{Error, Result};
use crate::infrastructure::config::source::SourceConfig;
use crate::port::PageFetcher;

/// [`PageFetcher`] over reqwest.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Build a fetcher from the source configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;
        Ok(Self::new(client, config.fetch_timeout()))
    }

    #[must_use]
    pub const fn new(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let request = async {
            let response = self.client.get(url).send().await?.error_for_status()?;
            response.text().await
        };

        match tokio::time::timeout(self.timeout, request).await {
            Ok(body) => {
                let body = body?;
                debug!(url, bytes = body.len(), "Fetched page");
                Ok(body)
            }
            Err(_) => Err(Error::FetchTimeout {
                url: url.to_string(),
                timeout: self.timeout,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            // Hold the connection open without answering.
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(socket);
        });

        let fetcher = HttpFetcher::new(Client::new(), Duration::from_millis(100));
        let url = format!("http://{addr}/sure-bets");
        let result = fetcher.fetch(&url).await;

        match result {
            Err(Error::FetchTimeout { url: timed_out, timeout }) => {
                assert_eq!(timed_out, url);
                assert_eq!(timeout, Duration::from_millis(100));
            }
            other => panic!("expected timeout, got {other:?}"),
        }
        server.abort();
    }

    #[tokio::test]
    async fn returns_body_on_success() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let body = "<table><tr><td>ok</td></tr></table>";
            let response = format!(
                "HTTP/1.1 200 OK\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });

        let fetcher = HttpFetcher::new(Client::new(), Duration::from_secs(5));
        let body = fetcher.fetch(&format!("http://{addr}/")).await.unwrap();
        assert!(body.contains("<td>ok</td>"));
    }

    #[tokio::test]
    async fn error_status_is_an_http_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            socket
                .write_all(b"HTTP/1.1 503 Service Unavailable\r\ncontent-length: 0\r\nconnection: close\r\n\r\n")
                .await
                .unwrap();
        });

        let fetcher = HttpFetcher::new(Client::new(), Duration::from_secs(5));
        let result = fetcher.fetch(&format!("http://{addr}/")).await;
        assert!(matches!(result, Err(Error::Http(_))));
    }
}
