//! Recording [`Delay`].

use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::watch;

use crate::port::Delay;

/// Returns immediately and records every requested wait.
///
/// With [`stopping_after`](Self::stopping_after) it also sends `true` on a
/// shutdown channel once the given number of waits has happened, which ends
/// a poller loop deterministically.
#[derive(Debug, Default)]
pub struct RecordingDelay {
    waits: Mutex<Vec<Duration>>,
    stop: Option<(usize, watch::Sender<bool>)>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stopping_after(waits: usize, shutdown: watch::Sender<bool>) -> Self {
        Self {
            waits: Mutex::new(Vec::new()),
            stop: Some((waits, shutdown)),
        }
    }

    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().clone()
    }
}

#[async_trait]
impl Delay for RecordingDelay {
    async fn wait(&self, duration: Duration) {
        let count = {
            let mut waits = self.waits.lock();
            waits.push(duration);
            waits.len()
        };
        if let Some((limit, shutdown)) = &self.stop {
            if count >= *limit {
                let _ = shutdown.send(true);
            }
        }
        tokio::task::yield_now().await;
    }
}
