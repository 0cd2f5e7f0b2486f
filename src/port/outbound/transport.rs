//! Chat bot transport port.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

/// One inbound update from the bot's update stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundUpdate {
    /// Monotonic update id assigned by the bot platform.
    pub id: u64,
    /// Chat the update came from, when it carries a message.
    pub chat_id: Option<i64>,
    /// Message text, when the update is a text message.
    pub text: Option<String>,
}

impl InboundUpdate {
    /// A text message update.
    pub fn message(id: u64, chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            id,
            chat_id: Some(chat_id),
            text: Some(text.into()),
        }
    }

    /// An update carrying no text (edits, joins, callbacks, ...).
    #[must_use]
    pub const fn silent(id: u64) -> Self {
        Self {
            id,
            chat_id: None,
            text: None,
        }
    }
}

/// Thin send/receive wrapper around a chat bot API.
#[async_trait]
pub trait BotTransport: Send + Sync {
    /// Long-poll for updates with id `>= offset`, waiting up to `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::error::Error::Transport) when the
    /// request fails or times out.
    async fn get_updates(&self, offset: u64, timeout: Duration) -> Result<Vec<InboundUpdate>>;

    /// Deliver `text` to `chat_id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dispatch`](crate::error::Error::Dispatch) when the
    /// platform rejects or fails to deliver the message.
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()>;
}
