//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - driving side: the command-line interface
//! - [`outbound`] - driven side: HTTP, HTML parsing, Telegram, timers

pub mod inbound;
pub mod outbound;
