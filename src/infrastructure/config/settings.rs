//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; the bot token and chat id are
//! read from the environment (`TELEGRAM_BOT_TOKEN`, `TELEGRAM_CHAT_ID`) and
//! never from the file.
//!
//! # Example
//!
//! ```no_run
//! use tipster::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use url::Url;

use super::digest::{DigestConfig, TELEGRAM_MESSAGE_LIMIT};
use super::logging::LoggingConfig;
use super::source::SourceConfig;
use super::telegram::TelegramAppConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Built once at startup and handed to the pipeline and poller; never
/// mutated afterwards.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Listing and profile page source.
    #[serde(default)]
    pub source: SourceConfig,

    /// Command trigger, default threshold and message size.
    #[serde(default)]
    pub digest: DigestConfig,

    /// Bot polling settings and credentials.
    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Secrets are read from the environment after parsing.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.telegram.load_secrets();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.source.listing_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "listing_url",
            }
            .into());
        }
        if let Err(e) = Url::parse(&self.source.listing_url) {
            return Err(ConfigError::InvalidValue {
                field: "listing_url",
                reason: e.to_string(),
            }
            .into());
        }
        if self.source.site_base_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "site_base_url",
            }
            .into());
        }
        if let Err(e) = Url::parse(&self.source.site_base_url) {
            return Err(ConfigError::InvalidValue {
                field: "site_base_url",
                reason: e.to_string(),
            }
            .into());
        }
        if let Err(e) = Url::parse(&self.source.fixtures_url) {
            return Err(ConfigError::InvalidValue {
                field: "fixtures_url",
                reason: e.to_string(),
            }
            .into());
        }
        match Url::parse(&self.source.match_page_url) {
            Err(e) => {
                return Err(ConfigError::InvalidValue {
                    field: "match_page_url",
                    reason: e.to_string(),
                }
                .into());
            }
            Ok(url) if !url.path().ends_with('/') => {
                return Err(ConfigError::InvalidValue {
                    field: "match_page_url",
                    reason: "must end with `/`".to_string(),
                }
                .into());
            }
            Ok(_) => {}
        }
        if self.source.fetch_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "fetch_timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.source.enrich_concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                field: "enrich_concurrency",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if !self.digest.trigger.starts_with('/') || self.digest.trigger.len() < 2 {
            return Err(ConfigError::InvalidValue {
                field: "trigger",
                reason: "must be a slash command such as /tips".to_string(),
            }
            .into());
        }
        if self.digest.max_message_chars == 0
            || self.digest.max_message_chars > TELEGRAM_MESSAGE_LIMIT
        {
            return Err(ConfigError::InvalidValue {
                field: "max_message_chars",
                reason: format!("must be between 1 and {TELEGRAM_MESSAGE_LIMIT}"),
            }
            .into());
        }

        if self.telegram.request_timeout_secs <= self.telegram.poll_timeout_secs {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs",
                reason: "must be greater than poll_timeout_secs".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
