//! Digest command and rendering configuration.

use serde::Deserialize;

/// Telegram rejects messages longer than this many characters.
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

/// How the digest command is recognised and rendered.
#[derive(Debug, Clone, Deserialize)]
pub struct DigestConfig {
    /// Command keyword, including the leading slash.
    #[serde(default = "default_trigger")]
    pub trigger: String,
    /// Threshold used when the command carries none (default: 8).
    #[serde(default = "default_min_confidence")]
    pub default_min_confidence: u32,
    /// Longest single message; longer digests are split (default: 4096).
    #[serde(default = "default_max_message_chars")]
    pub max_message_chars: usize,
}

fn default_trigger() -> String {
    "/ทีเด็ด".to_string()
}

const fn default_min_confidence() -> u32 {
    8
}

const fn default_max_message_chars() -> usize {
    TELEGRAM_MESSAGE_LIMIT
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            trigger: default_trigger(),
            default_min_confidence: default_min_confidence(),
            max_message_chars: default_max_message_chars(),
        }
    }
}
