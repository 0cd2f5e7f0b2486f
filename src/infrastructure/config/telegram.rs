//! Telegram bot configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Environment variable holding the bot token.
pub const TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";
/// Environment variable holding the target chat id.
pub const CHAT_ID_ENV: &str = "TELEGRAM_CHAT_ID";

/// Telegram polling configuration.
///
/// The bot token and chat id are secrets and only ever come from the
/// environment.
#[derive(Clone, Deserialize)]
pub struct TelegramAppConfig {
    /// Long-poll timeout passed to `getUpdates` (default: 30).
    #[serde(default = "default_poll_timeout_secs")]
    pub poll_timeout_secs: u64,
    /// Pause between poll iterations (default: 1000).
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// HTTP timeout for bot API calls; must exceed the long-poll timeout (default: 40).
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(skip)]
    pub bot_token: Option<String>,
    #[serde(skip)]
    pub chat_id: Option<String>,
}

const fn default_poll_timeout_secs() -> u64 {
    30
}

const fn default_poll_interval_ms() -> u64 {
    1000
}

const fn default_request_timeout_secs() -> u64 {
    40
}

/// Validated bot credential and delivery target.
#[derive(Clone)]
pub struct TelegramCredentials {
    pub bot_token: String,
    pub chat_id: i64,
}

impl std::fmt::Debug for TelegramCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramCredentials")
            .field("bot_token", &mask_token(&self.bot_token))
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

impl TelegramAppConfig {
    #[must_use]
    pub const fn poll_timeout(&self) -> Duration {
        Duration::from_secs(self.poll_timeout_secs)
    }

    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Read the token and chat id from the environment.
    pub fn load_secrets(&mut self) {
        self.bot_token = std::env::var(TOKEN_ENV).ok().filter(|v| !v.is_empty());
        self.chat_id = std::env::var(CHAT_ID_ENV).ok().filter(|v| !v.is_empty());
    }

    /// The credential needed to run the bot.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the token or chat id is missing, or the
    /// chat id is not an integer.
    #[allow(clippy::result_large_err)]
    pub fn credentials(&self) -> Result<TelegramCredentials> {
        let bot_token = self
            .bot_token
            .clone()
            .ok_or(ConfigError::MissingField { field: TOKEN_ENV })?;
        let raw_chat_id = self
            .chat_id
            .as_deref()
            .ok_or(ConfigError::MissingField { field: CHAT_ID_ENV })?;
        let chat_id = raw_chat_id
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                field: CHAT_ID_ENV,
                reason: format!("`{raw_chat_id}` is not an integer chat id"),
            })?;

        Ok(TelegramCredentials { bot_token, chat_id })
    }
}

impl std::fmt::Debug for TelegramAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramAppConfig")
            .field("poll_timeout_secs", &self.poll_timeout_secs)
            .field("poll_interval_ms", &self.poll_interval_ms)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("bot_token", &self.bot_token.as_deref().map(mask_token))
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            poll_timeout_secs: default_poll_timeout_secs(),
            poll_interval_ms: default_poll_interval_ms(),
            request_timeout_secs: default_request_timeout_secs(),
            bot_token: None,
            chat_id: None,
        }
    }
}

/// Shorten a token for display, keeping only its ends.
#[must_use]
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() >= 15 {
        let head: String = chars[..10].iter().collect();
        let tail: String = chars[chars.len() - 5..].iter().collect();
        format!("{head}...{tail}")
    } else {
        let head: String = chars.iter().take(chars.len().min(4)).collect();
        format!("{head}...")
    }
}
