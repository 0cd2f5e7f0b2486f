//! Tipster - football sure-bet digests over a Telegram bot.
//!
//! Scrapes a sure-bets listing, folds its rows into distinct matches,
//! enriches each match with team ratings from the home team's profile page,
//! filters and ranks by confidence, and answers bot commands with a
//! formatted digest. A second site supplies fixtures, head-to-head records
//! and match details for the match-centre commands.
//!
//! # Architecture
//!
//! - [`domain`] - Listing rows, match records, ratings, schedules, commands, fixtures
//! - [`port`] - Traits for page fetching, the bot transport and delays
//! - [`adapter`] - reqwest fetcher, scraper parser, teloxide transport, CLI
//! - [`application`] - Extract, dedup, enrich, rank, digest, poller, match centre
//! - [`infrastructure`] - Configuration and runtime wiring
//!
//! # Features
//!
//! - `telegram` (default) - teloxide-backed bot transport
//! - `testkit` - scripted fakes for integration tests
//!
//! # Example
//!
//! ```no_run
//! use tipster::infrastructure::bootstrap;
//! use tipster::infrastructure::config::settings::Config;
//!
//! # async fn example() -> tipster::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let digest = bootstrap::build_pipeline(&config)?.run(8).await?;
//! println!("{} matches", digest.matches.len());
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
