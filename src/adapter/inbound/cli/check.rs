//! Handlers for `tipster check`.

use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::dispatch::load_config;
use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::telegram::{mask_token, CHAT_ID_ENV, TOKEN_ENV};

/// Validate configuration without contacting any service.
pub fn execute_config(path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;
    let token_present = config.telegram.bot_token.is_some();
    let chat_present = config.telegram.chat_id.is_some();

    if output::is_json() {
        output::json_output(json!({
            "command": "check.config",
            "valid": true,
            "listing_url": config.source.listing_url,
            "trigger": config.digest.trigger,
            "default_min_confidence": config.digest.default_min_confidence,
            "telegram_token_present": token_present,
            "telegram_chat_present": chat_present,
        }));
        return Ok(());
    }

    output::section("Configuration Check");
    if let Some(path) = path {
        output::field("Config", path.display());
    }
    output::success("Configuration is valid");

    output::section("Summary");
    output::field("Listing", &config.source.listing_url);
    output::field("Profiles base", &config.source.site_base_url);
    output::field("Fetch timeout", format!("{}s", config.source.fetch_timeout_secs));
    output::field("Concurrency", config.source.enrich_concurrency);
    output::field("Fixtures", &config.source.fixtures_url);
    output::field("Trigger", &config.digest.trigger);
    output::field("Threshold", config.digest.default_min_confidence);

    if token_present && chat_present {
        output::success("Telegram credentials present");
    } else {
        output::warning("Telegram credentials missing (needed by `run` and `digest --send`)");
        if !token_present {
            output::field("Missing", TOKEN_ENV);
        }
        if !chat_present {
            output::field("Missing", CHAT_ID_ENV);
        }
    }

    Ok(())
}

/// Verify the bot token with `getMe`.
#[cfg(feature = "telegram")]
pub async fn execute_telegram(path: Option<&Path>) -> Result<()> {
    use crate::infrastructure::bootstrap;

    let config = load_config(path)?;
    let credentials = config.telegram.credentials()?;
    let transport = bootstrap::build_transport(&config, &credentials)?;
    let username = transport.identify().await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "check.telegram",
            "masked_token": mask_token(&credentials.bot_token),
            "chat_id": credentials.chat_id,
            "bot": username,
        }));
        return Ok(());
    }

    output::section("Telegram Check");
    output::field("Bot token", mask_token(&credentials.bot_token));
    output::field("Chat ID", credentials.chat_id);
    output::success(&format!("Authenticated as @{username}"));
    Ok(())
}

#[cfg(not(feature = "telegram"))]
pub async fn execute_telegram(path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;
    let credentials = config.telegram.credentials()?;
    output::field("Bot token", mask_token(&credentials.bot_token));
    output::warning("Built without the `telegram` feature, token not verified");
    Ok(())
}
