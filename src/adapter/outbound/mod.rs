//! Outbound adapters (driven side).

pub mod delay;
pub mod html;
pub mod http;
pub mod telegram;
