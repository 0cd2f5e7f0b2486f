//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod delay;
pub mod fetch;
pub mod transport;
