//! Command poller.
//!
//! Long-polls the bot transport, advances the update cursor and serves
//! recognized commands one at a time, in arrival order.
//!
//! ```text
//!   Idle ──► Awaiting ──► Processing ──► Idle ──(delay)──► Awaiting ...
//!                │
//!                └── poll failure ──► Idle (cursor unchanged)
//! ```

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use super::digest::{TextStyle, FETCH_FAILED_MESSAGE};
use super::pipeline::TipPipeline;
use crate::adapter::outbound::telegram::format::escape_markdown;
use crate::domain::{command_help, BotCommand, CommandParseError};
use crate::infrastructure::config::settings::Config;
use crate::port::{BotTransport, Delay, InboundUpdate};

/// Where the poller is in its loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Idle,
    Awaiting,
    Processing,
}

/// Drives the pipeline from inbound bot commands.
pub struct CommandPoller {
    pipeline: TipPipeline,
    transport: Arc<dyn BotTransport>,
    delay: Arc<dyn Delay>,
    chat_id: i64,
    trigger: String,
    default_min_confidence: u32,
    max_message_chars: usize,
    poll_timeout: Duration,
    poll_interval: Duration,
    cursor: u64,
    state: PollState,
}

impl CommandPoller {
    /// Create a poller replying to `chat_id`. The cursor starts at 0.
    #[must_use]
    pub fn new(
        config: &Config,
        chat_id: i64,
        pipeline: TipPipeline,
        transport: Arc<dyn BotTransport>,
        delay: Arc<dyn Delay>,
    ) -> Self {
        Self {
            pipeline,
            transport,
            delay,
            chat_id,
            trigger: config.digest.trigger.clone(),
            default_min_confidence: config.digest.default_min_confidence,
            max_message_chars: config.digest.max_message_chars,
            poll_timeout: config.telegram.poll_timeout(),
            poll_interval: config.telegram.poll_interval(),
            cursor: 0,
            state: PollState::Idle,
        }
    }

    /// Next update id to request.
    #[must_use]
    pub const fn cursor(&self) -> u64 {
        self.cursor
    }

    #[must_use]
    pub const fn state(&self) -> PollState {
        self.state
    }

    /// Run one poll iteration: fetch updates, then serve them in order.
    ///
    /// Returns the number of updates received. A poll failure is logged and
    /// counts as an empty batch; the cursor is left unchanged.
    pub async fn poll_once(&mut self) -> usize {
        self.state = PollState::Awaiting;
        let updates = match self
            .transport
            .get_updates(self.cursor, self.poll_timeout)
            .await
        {
            Ok(updates) => updates,
            Err(e) => {
                warn!(error = %e, cursor = self.cursor, "Poll failed");
                self.state = PollState::Idle;
                return 0;
            }
        };

        self.state = PollState::Processing;
        let count = updates.len();
        for update in updates {
            self.cursor = self.cursor.max(update.id.saturating_add(1));
            self.handle_update(update).await;
        }
        if count > 0 {
            debug!(cursor = self.cursor, updates = count, "Processed updates");
        }

        self.state = PollState::Idle;
        count
    }

    /// Poll until `shutdown` turns true or its sender is dropped, pausing
    /// the configured interval between iterations.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) {
        info!(
            trigger = %self.trigger,
            chat_id = self.chat_id,
            "Command poller started"
        );

        loop {
            tokio::select! {
                biased;
                () = wait_for_shutdown(&mut shutdown) => break,
                _ = self.poll_once() => {}
            }
            tokio::select! {
                biased;
                () = wait_for_shutdown(&mut shutdown) => break,
                () = self.delay.wait(self.poll_interval) => {}
            }
        }

        self.state = PollState::Idle;
        info!(cursor = self.cursor, "Command poller stopped");
    }

    async fn handle_update(&self, update: InboundUpdate) {
        let Some(text) = update.text.as_deref() else {
            return;
        };

        match BotCommand::parse(text, &self.trigger, self.default_min_confidence) {
            Ok(BotCommand::Digest { min_confidence }) => {
                info!(
                    update_id = update.id,
                    from_chat = ?update.chat_id,
                    min_confidence,
                    "Digest requested"
                );
                self.serve_digest(min_confidence).await;
            }
            Ok(BotCommand::Help) => {
                let help = command_help(&self.trigger, self.default_min_confidence);
                self.dispatch(&escape_markdown(&help)).await;
            }
            Err(CommandParseError::UnknownCommand(command)) => {
                debug!(update_id = update.id, %command, "Ignoring unknown command");
            }
            Err(CommandParseError::NotACommand) => {}
        }
    }

    async fn serve_digest(&self, min_confidence: u32) {
        match self.pipeline.run(min_confidence).await {
            Ok(digest) => {
                let messages = digest.messages(TextStyle::Markdown, self.max_message_chars);
                for message in &messages {
                    self.dispatch(message).await;
                }
            }
            Err(e) => {
                error!(error = %e, "Listing fetch failed");
                self.dispatch(&escape_markdown(FETCH_FAILED_MESSAGE)).await;
            }
        }
    }

    async fn dispatch(&self, text: &str) {
        if let Err(e) = self.transport.send_message(self.chat_id, text).await {
            error!(error = %e, chat_id = self.chat_id, "Failed to send message");
        }
    }
}

async fn wait_for_shutdown(shutdown: &mut watch::Receiver<bool>) {
    loop {
        if *shutdown.borrow_and_update() {
            return;
        }
        if shutdown.changed().await.is_err() {
            return;
        }
    }
}
