//! Telegram bot adapter.
//!
//! [`format`] holds the MarkdownV2 helpers and is always available;
//! [`TelegramTransport`] requires the `telegram` feature.

pub mod format;

#[cfg(feature = "telegram")]
mod transport;

#[cfg(feature = "telegram")]
pub use transport::TelegramTransport;
