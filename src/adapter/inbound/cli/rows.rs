//! Handler for the `rows` command: deduplicated listing as a table.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::ConfigPathArg;
use crate::adapter::inbound::cli::dispatch::load_config;
use crate::adapter::inbound::cli::output;
use crate::domain::MatchRecord;
use crate::error::Result;
use crate::infrastructure::bootstrap;

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "Kick-off")]
    kickoff: String,
    #[tabled(rename = "League")]
    league: String,
    #[tabled(rename = "Home")]
    home: String,
    #[tabled(rename = "Away")]
    away: String,
    #[tabled(rename = "Odds")]
    odds: String,
    #[tabled(rename = "Move")]
    movement: &'static str,
    #[tabled(rename = "Conf")]
    confidence: u32,
    #[tabled(rename = "Tip")]
    tip: String,
}

impl From<&MatchRecord> for MatchRow {
    fn from(record: &MatchRecord) -> Self {
        let kickoff = if record.schedule.is_empty() {
            "-".to_string()
        } else {
            format!("{} {}", record.schedule.date, record.schedule.time)
        };
        Self {
            kickoff,
            league: record.league.code.clone(),
            home: record.home.name.clone(),
            away: record.away.name.clone(),
            odds: record.odds_text.clone(),
            movement: record.price_movement.arrow(),
            confidence: record.confidence,
            tip: record.recommended.clone().unwrap_or_default(),
        }
    }
}

/// Execute the rows command.
pub async fn execute(args: &ConfigPathArg) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    config.init_logging();

    let book = bootstrap::build_pipeline(&config)?.records().await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "rows",
            "count": book.len(),
            "records": book.records(),
        }));
        return Ok(());
    }

    if book.is_empty() {
        output::warning("No matches on the listing page");
        return Ok(());
    }

    output::section(&format!("{} match(es)", book.len()));
    let rows: Vec<MatchRow> = book.records().iter().map(MatchRow::from).collect();
    output::block(&Table::new(rows).to_string());
    Ok(())
}
