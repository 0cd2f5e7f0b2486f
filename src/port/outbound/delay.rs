//! Delay port.

use std::time::Duration;

use async_trait::async_trait;

/// Suspends the caller for a duration; injectable so loops can be tested
/// without real sleeping.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration);
}
