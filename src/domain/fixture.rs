//! Fixtures and match pages from the match-centre site.
//!
//! [`FixtureSection`] and [`MatchPage`] are what the document parser reads
//! off the pages; [`LeagueFixtures`] and [`MatchDetails`] are what the
//! commands report.

use serde::Serialize;

use super::schedule::Schedule;
use super::table::TableRow;

/// Marker that precedes the standings update time.
const LAST_UPDATED_MARKER: &str = "*อัพเดต่าสุด";

/// A name with its badge or logo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub name: String,
    pub image: Option<String>,
}

/// One fixture card as printed on the listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureCard {
    /// Kick-off text, e.g. `"15/03 20:00"` or a live marker.
    pub date_text: String,
    pub home: Badge,
    pub away: Badge,
    pub score: String,
    pub link: Option<String>,
}

/// One league block on the listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureSection {
    pub league: Badge,
    pub cards: Vec<FixtureCard>,
}

/// A fixture ready to report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fixture {
    /// Match id, the last segment of the match page link.
    pub id: Option<String>,
    pub schedule: Schedule,
    pub home: Badge,
    pub away: Badge,
    pub score: String,
    pub link: Option<String>,
}

/// Fixtures grouped under their league, in page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeagueFixtures {
    pub league: Badge,
    pub fixtures: Vec<Fixture>,
}

/// Last path segment of a match link, ignoring a trailing slash.
#[must_use]
pub fn match_id_from_link(link: &str) -> Option<String> {
    link.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
}

/// Header facts of a match page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchOverview {
    pub date: String,
    pub league: String,
    pub venue: String,
    pub referee: String,
}

/// One statistic compared between the sides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatLine {
    pub name: String,
    pub home: String,
    pub away: String,
}

/// One earlier meeting of the two teams.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeadToHead {
    pub competition: String,
    pub date: String,
    pub home: String,
    pub score: String,
    pub away: String,
    /// Result badge, e.g. `W`, `D` or `L`.
    pub result: String,
}

/// One league table row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StandingRow {
    pub position: String,
    pub team: Badge,
    pub played: String,
    pub won: String,
    pub drawn: String,
    pub lost: String,
    pub goals_for: String,
    pub goals_against: String,
    pub goal_difference: String,
    pub points: String,
}

/// The league table shown on a match page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Standings {
    pub league: Badge,
    pub rows: Vec<StandingRow>,
    /// Update time as printed, when the page states one.
    pub last_updated: Option<String>,
}

/// Everything reported for one match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchDetails {
    pub overview: MatchOverview,
    pub head_to_head: Vec<HeadToHead>,
    pub statistics: Vec<StatLine>,
    pub standings: Standings,
}

/// A match page as read by the document parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchPage {
    pub overview: MatchOverview,
    pub statistics: Vec<StatLine>,
    pub league: Badge,
    /// Footer text of the standings tab.
    pub standings_footer: String,
    /// Rows of the dedicated head-to-head table; `None` when the page has none.
    pub head_to_head_rows: Option<Vec<TableRow>>,
    /// Rows of every striped table, head-to-head and standings alike.
    pub table_rows: Vec<TableRow>,
}

/// Read the update time out of a standings footer such as
/// `*อัพเดต่าสุด : 15/03/2025 10:00`.
#[must_use]
pub fn parse_last_updated(footer: &str) -> Option<String> {
    let (_, rest) = footer.split_once(LAST_UPDATED_MARKER)?;
    let value = rest.trim_start().strip_prefix(':')?.trim();
    (!value.is_empty()).then(|| value.to_string())
}
