//! Command dispatch and configuration lookup shared by the handlers.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::adapter::inbound::cli::command::{CheckCommand, Cli, Commands};
use crate::adapter::inbound::cli::{check, digest, fixtures, rows, run};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Dispatch a parsed command line.
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run(args) => run::execute(&args).await,
        Commands::Digest(args) => digest::execute(&args).await,
        Commands::Rows(args) => rows::execute(&args).await,
        Commands::Matches(args) => fixtures::execute_matches(&args).await,
        Commands::H2h(args) => fixtures::execute_h2h(&args).await,
        Commands::Match(args) => fixtures::execute_match(&args).await,
        Commands::Check(CheckCommand::Config(args)) => check::execute_config(args.config.as_deref()),
        Commands::Check(CheckCommand::Telegram(args)) => {
            check::execute_telegram(args.config.as_deref()).await
        }
    }
}

/// Load configuration from `path`, or from `config.toml` when present.
///
/// Without an explicit path and without `config.toml`, built-in defaults
/// plus environment secrets are used. An explicit path must exist.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_PATH);
            if default.exists() {
                Config::load(default)
            } else {
                debug!("No config file, using defaults");
                Config::parse_toml("")
            }
        }
    }
}
