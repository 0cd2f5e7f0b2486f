//! Handler for the `digest` command: one direct query.

use serde_json::json;

use crate::adapter::inbound::cli::command::DigestArgs;
use crate::adapter::inbound::cli::dispatch::load_config;
use crate::adapter::inbound::cli::output;
use crate::application::{Digest, TextStyle};
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Execute the digest command.
///
/// A failed listing fetch is returned as an error so the process exits
/// non-zero.
pub async fn execute(args: &DigestArgs) -> Result<()> {
    let config = load_config(args.config.config.as_deref())?;
    config.init_logging();

    let min_confidence = args
        .min_confidence
        .unwrap_or(config.digest.default_min_confidence);
    let pipeline = bootstrap::build_pipeline(&config)?;
    let digest = pipeline.run(min_confidence).await?;

    if args.send {
        return send(&config, &digest).await;
    }

    if output::is_json() {
        output::json_output(json!({
            "command": "digest",
            "min_confidence": digest.min_confidence,
            "count": digest.matches.len(),
            "matches": digest.matches,
        }));
        return Ok(());
    }

    output::block(&digest.render(TextStyle::Plain));
    Ok(())
}

#[cfg(feature = "telegram")]
async fn send(config: &Config, digest: &Digest) -> Result<()> {
    use crate::error::Error;
    use crate::port::BotTransport;

    let credentials = config.telegram.credentials()?;
    let transport = bootstrap::build_transport(config, &credentials)?;
    let messages = digest.messages(TextStyle::Markdown, config.digest.max_message_chars);

    let mut failed = 0usize;
    for message in &messages {
        if let Err(e) = transport.send_message(credentials.chat_id, message).await {
            tracing::error!(error = %e, "Failed to send message");
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(Error::Dispatch(format!(
            "{failed} of {} messages were not delivered",
            messages.len()
        )));
    }

    output::success(&format!(
        "Sent {} match(es) in {} message(s) to chat {}",
        digest.matches.len(),
        messages.len(),
        credentials.chat_id
    ));
    Ok(())
}

#[cfg(not(feature = "telegram"))]
async fn send(_config: &Config, _digest: &Digest) -> Result<()> {
    Err(crate::error::Error::Dispatch(
        "built without the `telegram` feature".to_string(),
    ))
}
