//! Handlers for the match-centre commands: `matches`, `h2h` and `match`.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::{ConfigPathArg, MatchArgs};
use crate::adapter::inbound::cli::dispatch::load_config;
use crate::adapter::inbound::cli::output;
use crate::domain::{Fixture, HeadToHead, StandingRow, StatLine};
use crate::error::Result;
use crate::infrastructure::bootstrap;

#[derive(Tabled)]
struct FixtureRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Kick-off")]
    kickoff: String,
    #[tabled(rename = "Home")]
    home: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Away")]
    away: String,
}

impl From<&Fixture> for FixtureRow {
    fn from(fixture: &Fixture) -> Self {
        let kickoff = if fixture.schedule.is_empty() {
            "-".to_string()
        } else {
            format!("{} {}", fixture.schedule.date, fixture.schedule.time)
        };
        Self {
            id: fixture.id.clone().unwrap_or_else(|| "-".to_string()),
            kickoff,
            home: fixture.home.name.clone(),
            score: fixture.score.clone(),
            away: fixture.away.name.clone(),
        }
    }
}

#[derive(Tabled)]
struct MeetingRow {
    #[tabled(rename = "Competition")]
    competition: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Home")]
    home: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Away")]
    away: String,
    #[tabled(rename = "Result")]
    result: String,
}

impl From<&HeadToHead> for MeetingRow {
    fn from(m: &HeadToHead) -> Self {
        Self {
            competition: m.competition.clone(),
            date: m.date.clone(),
            home: m.home.clone(),
            score: m.score.clone(),
            away: m.away.clone(),
            result: m.result.clone(),
        }
    }
}

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Home")]
    home: String,
    #[tabled(rename = "Statistic")]
    name: String,
    #[tabled(rename = "Away")]
    away: String,
}

impl From<&StatLine> for StatRow {
    fn from(stat: &StatLine) -> Self {
        Self {
            home: stat.home.clone(),
            name: stat.name.clone(),
            away: stat.away.clone(),
        }
    }
}

#[derive(Tabled)]
struct StandingsRow {
    #[tabled(rename = "#")]
    position: String,
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "P")]
    played: String,
    #[tabled(rename = "W")]
    won: String,
    #[tabled(rename = "D")]
    drawn: String,
    #[tabled(rename = "L")]
    lost: String,
    #[tabled(rename = "GF")]
    goals_for: String,
    #[tabled(rename = "GA")]
    goals_against: String,
    #[tabled(rename = "GD")]
    goal_difference: String,
    #[tabled(rename = "Pts")]
    points: String,
}

impl From<&StandingRow> for StandingsRow {
    fn from(row: &StandingRow) -> Self {
        Self {
            position: row.position.clone(),
            team: row.team.name.clone(),
            played: row.played.clone(),
            won: row.won.clone(),
            drawn: row.drawn.clone(),
            lost: row.lost.clone(),
            goals_for: row.goals_for.clone(),
            goals_against: row.goals_against.clone(),
            goal_difference: row.goal_difference.clone(),
            points: row.points.clone(),
        }
    }
}

/// Execute the matches command.
pub async fn execute_matches(args: &ConfigPathArg) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    config.init_logging();

    let leagues = bootstrap::build_match_centre(&config)?.fixtures().await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "matches",
            "count": leagues.iter().map(|l| l.fixtures.len()).sum::<usize>(),
            "leagues": leagues,
        }));
        return Ok(());
    }

    if leagues.is_empty() {
        output::warning("No fixtures on the match centre");
        return Ok(());
    }

    for league in &leagues {
        output::section(&format!("{} ({})", league.league.name, league.fixtures.len()));
        let rows: Vec<FixtureRow> = league.fixtures.iter().map(FixtureRow::from).collect();
        output::block(&Table::new(rows).to_string());
    }
    Ok(())
}

/// Execute the h2h command.
pub async fn execute_h2h(args: &MatchArgs) -> Result<()> {
    let config = load_config(args.config.config.as_deref())?;
    config.init_logging();

    let meetings = bootstrap::build_match_centre(&config)?
        .head_to_head(&args.id)
        .await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "h2h",
            "match_id": args.id,
            "count": meetings.len(),
            "meetings": meetings,
        }));
        return Ok(());
    }

    if meetings.is_empty() {
        output::warning("No earlier meetings listed");
        return Ok(());
    }

    output::section(&format!("Head to head, match {}", args.id));
    let rows: Vec<MeetingRow> = meetings.iter().map(MeetingRow::from).collect();
    output::block(&Table::new(rows).to_string());
    Ok(())
}

/// Execute the match command.
pub async fn execute_match(args: &MatchArgs) -> Result<()> {
    let config = load_config(args.config.config.as_deref())?;
    config.init_logging();

    let details = bootstrap::build_match_centre(&config)?
        .details(&args.id)
        .await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "match",
            "match_id": args.id,
            "details": details,
        }));
        return Ok(());
    }

    output::section(&format!("Match {}", args.id));
    output::field("Date", &details.overview.date);
    output::field("League", &details.overview.league);
    output::field("Venue", &details.overview.venue);
    output::field("Referee", &details.overview.referee);

    if !details.statistics.is_empty() {
        output::section("Statistics");
        let rows: Vec<StatRow> = details.statistics.iter().map(StatRow::from).collect();
        output::block(&Table::new(rows).to_string());
    }

    if !details.head_to_head.is_empty() {
        output::section("Head to head");
        let rows: Vec<MeetingRow> = details.head_to_head.iter().map(MeetingRow::from).collect();
        output::block(&Table::new(rows).to_string());
    }

    let standings = &details.standings;
    if !standings.rows.is_empty() {
        output::section(&format!("Standings: {}", standings.league.name));
        let rows: Vec<StandingsRow> = standings.rows.iter().map(StandingsRow::from).collect();
        output::block(&Table::new(rows).to_string());
    }
    output::field(
        "Updated",
        standings.last_updated.as_deref().unwrap_or("unknown"),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Badge, Schedule};

    #[test]
    fn fixture_row_falls_back_to_dashes() {
        let fixture = Fixture {
            id: None,
            schedule: Schedule::default(),
            home: Badge {
                name: "Spurs".into(),
                image: None,
            },
            away: Badge {
                name: "Everton".into(),
                image: None,
            },
            score: String::new(),
            link: None,
        };
        let row = FixtureRow::from(&fixture);
        assert_eq!(row.id, "-");
        assert_eq!(row.kickoff, "-");

        let table = Table::new(vec![row]).to_string();
        assert!(table.contains("Kick-off"));
        assert!(table.contains("Everton"));
    }

    #[test]
    fn standings_table_has_short_headers() {
        let row = StandingRow {
            position: "1".into(),
            team: Badge {
                name: "Arsenal".into(),
                image: None,
            },
            points: "65".into(),
            ..StandingRow::default()
        };
        let table = Table::new(vec![StandingsRow::from(&row)]).to_string();
        assert!(table.contains("Pts"));
        assert!(table.contains("Arsenal"));
        assert!(table.contains("65"));
    }
}
