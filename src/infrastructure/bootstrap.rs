//! Composition root: wires adapters into the pipeline and poller.

use std::sync::Arc;

#[cfg(feature = "telegram")]
use tokio::sync::watch;
#[cfg(feature = "telegram")]
use tracing::{info, warn};

use crate::adapter::outbound::http::HttpFetcher;
use crate::application::{MatchCentre, TipPipeline};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::PageFetcher;

#[cfg(feature = "telegram")]
use crate::adapter::outbound::delay::TokioDelay;
#[cfg(feature = "telegram")]
use crate::adapter::outbound::telegram::TelegramTransport;
#[cfg(feature = "telegram")]
use crate::application::CommandPoller;
#[cfg(feature = "telegram")]
use crate::infrastructure::config::telegram::TelegramCredentials;

/// Build the HTTP page fetcher.
pub fn build_fetcher(config: &Config) -> Result<Arc<dyn PageFetcher>> {
    Ok(Arc::new(HttpFetcher::from_config(&config.source)?))
}

/// Build the tip pipeline over HTTP.
pub fn build_pipeline(config: &Config) -> Result<TipPipeline> {
    TipPipeline::new(build_fetcher(config)?, &config.source)
}

/// Build the match-centre lookups over HTTP.
pub fn build_match_centre(config: &Config) -> Result<MatchCentre> {
    MatchCentre::new(build_fetcher(config)?, &config.source)
}

/// Build the Telegram transport from validated credentials.
#[cfg(feature = "telegram")]
pub fn build_transport(
    config: &Config,
    credentials: &TelegramCredentials,
) -> Result<Arc<TelegramTransport>> {
    Ok(Arc::new(TelegramTransport::new(
        &credentials.bot_token,
        config.telegram.request_timeout(),
    )?))
}

/// Run the command poller until `shutdown` fires.
///
/// Missing credentials fail here, before any polling starts.
#[cfg(feature = "telegram")]
pub async fn run_bot(config: Config, shutdown: watch::Receiver<bool>) -> Result<()> {
    let credentials = config.telegram.credentials()?;
    let transport = build_transport(&config, &credentials)?;

    match transport.identify().await {
        Ok(username) => info!(bot = %username, "Telegram credential verified"),
        Err(e) => warn!(error = %e, "Could not verify bot credential, polling anyway"),
    }

    let pipeline = build_pipeline(&config)?;
    let mut poller = CommandPoller::new(
        &config,
        credentials.chat_id,
        pipeline,
        transport,
        Arc::new(TokioDelay),
    );
    poller.run(shutdown).await;
    Ok(())
}
