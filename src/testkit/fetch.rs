//! In-memory [`PageFetcher`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::port::PageFetcher;

/// What a URL answers with.
#[derive(Debug, Clone)]
pub enum PageScript {
    Body(String),
    Timeout,
    Fail(String),
}

/// Serves canned pages by exact URL; unknown URLs fail.
///
/// Tracks every requested URL and the highest number of fetches in flight
/// at once.
#[derive(Debug, Default)]
pub struct StaticFetcher {
    pages: HashMap<String, PageScript>,
    requests: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(url.into(), PageScript::Body(body.into()));
        self
    }

    pub fn with_timeout(mut self, url: impl Into<String>) -> Self {
        self.pages.insert(url.into(), PageScript::Timeout);
        self
    }

    pub fn with_failure(mut self, url: impl Into<String>, reason: impl Into<String>) -> Self {
        self.pages.insert(url.into(), PageScript::Fail(reason.into()));
        self
    }

    /// URLs requested so far, in call order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.requests.lock().push(url.to_string());
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        // Let sibling fetches start before this one settles.
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match self.pages.get(url) {
            Some(PageScript::Body(body)) => Ok(body.clone()),
            Some(PageScript::Timeout) => Err(Error::FetchTimeout {
                url: url.to_string(),
                timeout: Duration::from_secs(10),
            }),
            Some(PageScript::Fail(reason)) => Err(Error::Transport(reason.clone())),
            None => Err(Error::Transport(format!("no page scripted for {url}"))),
        }
    }
}
