//! Page fetching port.

use async_trait::async_trait;

use crate::error::Result;

/// Read-only HTTP GET of a page body.
///
/// Implementations bound every call by a fixed timeout and report an
/// expired timeout as [`Error::FetchTimeout`](crate::error::Error::FetchTimeout).
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `url` and return its body as text.
    ///
    /// # Errors
    ///
    /// Returns an error on timeout, transport failure or a non-success status.
    async fn fetch(&self, url: &str) -> Result<String>;
}
