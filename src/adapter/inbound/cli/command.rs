//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Football sure-bet digests over a Telegram bot
#[derive(Parser, Debug)]
#[command(name = "tipster")]
#[command(version, about)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Poll the bot for commands and answer them until Ctrl-C
    Run(RunArgs),

    /// Build a digest once and print or send it
    Digest(DigestArgs),

    /// List deduplicated matches from the listing page
    Rows(ConfigPathArg),

    /// List today's fixtures by league from the match centre
    Matches(ConfigPathArg),

    /// Show earlier meetings of the two teams in a match
    H2h(MatchArgs),

    /// Show overview, statistics and standings for a match
    Match(MatchArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `tipster check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file.
    Config(ConfigPathArg),
    /// Verify the bot token with Telegram.
    Telegram(ConfigPathArg),
}

/// Shared argument for commands that only need a configuration path.
#[derive(Args, Debug, Default)]
pub struct ConfigPathArg {
    /// Path to the configuration file [default: config.toml when present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for `tipster run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Override the configured log level
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

/// Arguments for `tipster h2h` and `tipster match`.
#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Match id, as listed by `tipster matches`
    pub id: String,

    #[command(flatten)]
    pub config: ConfigPathArg,
}

/// Arguments for `tipster digest`.
#[derive(Args, Debug)]
pub struct DigestArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Minimum confidence [default: digest.default_min_confidence]
    #[arg(long)]
    pub min_confidence: Option<u32>,

    /// Send the digest to the configured chat instead of printing it
    #[arg(long)]
    pub send: bool,
}
