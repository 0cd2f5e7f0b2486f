//! teloxide-backed [`BotTransport`].

use std::time::Duration;

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ParseMode, UpdateKind};
use tracing::debug;

use crate::error::{Error, Result};
use crate::port::{BotTransport, InboundUpdate};

/// Bot API client for long polling and message delivery.
///
/// All messages are sent with `MarkdownV2` parse mode.
#[derive(Clone)]
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    /// Create a transport whose HTTP client gives up after `request_timeout`.
    ///
    /// `request_timeout` must exceed the long-poll timeout passed to
    /// [`BotTransport::get_updates`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the HTTP client cannot be built.
    pub fn new(bot_token: &str, request_timeout: Duration) -> Result<Self> {
        let client = teloxide::net::default_reqwest_settings()
            .timeout(request_timeout)
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;
        Ok(Self {
            bot: Bot::with_client(bot_token, client),
        })
    }

    /// Verify the credential with `getMe` and return the bot's username.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the token is rejected or the API is
    /// unreachable.
    pub async fn identify(&self) -> Result<String> {
        let me = self
            .bot
            .get_me()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        Ok(me.username().to_string())
    }
}

#[async_trait]
impl BotTransport for TelegramTransport {
    async fn get_updates(&self, offset: u64, timeout: Duration) -> Result<Vec<InboundUpdate>> {
        let offset = i32::try_from(offset)
            .map_err(|_| Error::Transport(format!("update offset {offset} out of range")))?;
        let timeout = u32::try_from(timeout.as_secs()).unwrap_or(u32::MAX);

        let updates = self
            .bot
            .get_updates()
            .offset(offset)
            .timeout(timeout)
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        debug!(offset, count = updates.len(), "Received updates");

        Ok(updates
            .into_iter()
            .map(|update| {
                let id = u64::from(update.id.0);
                match update.kind {
                    UpdateKind::Message(message) => match message.text() {
                        Some(text) => InboundUpdate::message(id, message.chat.id.0, text),
                        None => InboundUpdate {
                            id,
                            chat_id: Some(message.chat.id.0),
                            text: None,
                        },
                    },
                    _ => InboundUpdate::silent(id),
                }
            })
            .collect())
    }

    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat_id), text)
            .parse_mode(ParseMode::MarkdownV2)
            .await
            .map_err(|e| Error::Dispatch(e.to_string()))?;
        Ok(())
    }
}
