//! Handler for the `run` command.

use tokio::signal;
use tracing::info;

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::dispatch::load_config;
use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let mut config = load_config(args.config.config.as_deref())?;
    apply_overrides(&mut config, args);

    // Fail on missing credentials before logging starts.
    let credentials = config.telegram.credentials()?;
    config.init_logging();

    output::section("tipster");
    output::field("Trigger", &config.digest.trigger);
    output::field("Threshold", config.digest.default_min_confidence);
    output::field("Chat ID", credentials.chat_id);
    output::field("Listing", &config.source.listing_url);

    serve(config).await
}

fn apply_overrides(config: &mut Config, args: &RunArgs) {
    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }
}

#[cfg(feature = "telegram")]
async fn serve(config: Config) -> Result<()> {
    use tokio::sync::watch;

    use crate::infrastructure::bootstrap;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let bot = bootstrap::run_bot(config, shutdown_rx);
    tokio::pin!(bot);

    tokio::select! {
        result = &mut bot => {
            info!("tipster stopped");
            return result;
        }
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received (Ctrl+C)");
            let _ = shutdown_tx.send(true);
        }
    }

    let result = bot.await;
    info!("tipster stopped");
    result
}

#[cfg(not(feature = "telegram"))]
async fn serve(config: Config) -> Result<()> {
    let _ = config;
    output::warning("Built without the `telegram` feature, nothing to poll");
    let _ = signal::ctrl_c().await;
    info!("tipster stopped");
    Ok(())
}
