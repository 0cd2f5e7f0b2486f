//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`fetch`] - [`StaticFetcher`](fetch::StaticFetcher): canned pages per URL.
//! - [`transport`] - [`ScriptedTransport`](transport::ScriptedTransport):
//!   scripted poll batches and a record of sent messages.
//! - [`delay`] - [`RecordingDelay`](delay::RecordingDelay): records waits
//!   and can trip a shutdown signal.
//! - [`html`] - Listing and profile page fixtures.
//! - [`config`] - Canonical test configuration.

pub mod config;
pub mod delay;
pub mod fetch;
pub mod html;
pub mod transport;
