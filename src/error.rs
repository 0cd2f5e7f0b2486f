use std::time::Duration;

use thiserror::Error;

/// Configuration-related errors with structured variants.
///
/// Any of these surfacing at startup is fatal: the process cannot serve
/// commands without a valid configuration and bot credential.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("request to {url} timed out after {}s", timeout.as_secs())]
    FetchTimeout { url: String, timeout: Duration },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("parse miss: {0}")]
    ParseMiss(String),

    #[error("invalid match id `{0}`")]
    InvalidMatchId(String),

    #[error("dispatch failed: {0}")]
    Dispatch(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// True for the startup failure class (bad configuration or credential).
    #[must_use]
    pub const fn is_startup_failure(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
