//! Match deduplication.

use tracing::debug;
use url::Url;

use crate::domain::{MatchBook, MatchKey, MatchRecord, RawMatchRow, Schedule, Team, TeamLink};

/// Fold rows into one record per (home, away, schedule token).
///
/// The first row for a key wins; later duplicates are dropped whole,
/// including any emphasis they carry. Team links are resolved against
/// `base_url`; a link that fails to resolve leaves the profile URL unset.
pub fn deduplicate<I>(rows: I, base_url: &Url, year: i32) -> MatchBook
where
    I: IntoIterator<Item = RawMatchRow>,
{
    let mut book = MatchBook::new();
    let mut duplicates = 0usize;

    for row in rows {
        let key = MatchKey::new(&row.home.name, &row.away.name, &row.schedule_token);
        if book.contains(&key) {
            duplicates += 1;
            continue;
        }
        book.insert_first(key, into_record(row, base_url, year));
    }

    debug!(records = book.len(), duplicates, "Deduplicated listing rows");
    book
}

fn into_record(row: RawMatchRow, base_url: &Url, year: i32) -> MatchRecord {
    MatchRecord {
        schedule: Schedule::from_token(&row.schedule_token, year),
        league: row.league,
        home: team(row.home, base_url),
        away: team(row.away, base_url),
        odds: row.odds,
        odds_text: row.odds_text,
        columns: row.columns,
        price_movement: row.price_movement,
        confidence: row.confidence,
        recommended: row.emphasized,
    }
}

fn team(link: TeamLink, base_url: &Url) -> Team {
    let profile_url = link.href.as_deref().and_then(|href| base_url.join(href).ok());
    Team {
        name: link.name,
        profile_url,
    }
}
