//! Match-centre lookups: the fixture listing, head-to-head records and
//! match details.

use std::sync::Arc;

use tracing::debug;
use url::Url;

use crate::adapter::outbound::html::{parse_fixture_sections, parse_match_page};
use crate::domain::{
    bangkok_year_now, match_id_from_link, parse_last_updated, Badge, Fixture, FixtureSection,
    HeadToHead, LeagueFixtures, MatchDetails, Schedule, StandingRow, Standings, TableRow,
};
use crate::error::{Error, Result};
use crate::infrastructure::config::source::SourceConfig;
use crate::port::PageFetcher;

/// Cells in a head-to-head row.
const HEAD_TO_HEAD_CELLS: usize = 6;
/// Cells in a standings row.
const STANDING_CELLS: usize = 10;

/// Reads fixtures and match pages from the match-centre site.
#[derive(Clone)]
pub struct MatchCentre {
    fetcher: Arc<dyn PageFetcher>,
    fixtures_url: String,
    match_page_url: Url,
    year: Option<i32>,
}

impl MatchCentre {
    /// # Errors
    ///
    /// Returns an error if `match_page_url` is not an absolute URL.
    pub fn new(fetcher: Arc<dyn PageFetcher>, source: &SourceConfig) -> Result<Self> {
        Ok(Self {
            fetcher,
            fixtures_url: source.fixtures_url.clone(),
            match_page_url: Url::parse(&source.match_page_url)?,
            year: None,
        })
    }

    /// Pin the year kick-off times are read in.
    #[must_use]
    pub const fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Fetch the fixture listing grouped by league.
    ///
    /// # Errors
    ///
    /// Returns the fetch error when the listing cannot be retrieved.
    pub async fn fixtures(&self) -> Result<Vec<LeagueFixtures>> {
        let body = self.fetcher.fetch(&self.fixtures_url).await?;
        let sections = parse_fixture_sections(&body);
        debug!(leagues = sections.len(), url = %self.fixtures_url, "Parsed fixture listing");

        let year = self.year.unwrap_or_else(bangkok_year_now);
        Ok(league_fixtures(sections, year))
    }

    /// Page URL of match `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMatchId`] unless `id` is a single non-empty
    /// path segment.
    pub fn match_url(&self, id: &str) -> Result<Url> {
        let id = id.trim();
        if id.is_empty() || id.contains(['/', '?', '#', '\\']) || id == "." || id == ".." {
            return Err(Error::InvalidMatchId(id.to_string()));
        }
        Ok(self.match_page_url.join(id)?)
    }

    /// Earlier meetings listed on the match page.
    ///
    /// # Errors
    ///
    /// Returns the fetch error, or [`Error::ParseMiss`] when the page has no
    /// head-to-head table.
    pub async fn head_to_head(&self, id: &str) -> Result<Vec<HeadToHead>> {
        let url = self.match_url(id)?;
        let page = parse_match_page(&self.fetcher.fetch(url.as_str()).await?);
        let rows = page.head_to_head_rows.ok_or_else(|| {
            Error::ParseMiss(format!("match {id} has no head-to-head table"))
        })?;
        Ok(head_to_head_rows(&rows))
    }

    /// Overview, head-to-head, statistics and standings of one match.
    ///
    /// # Errors
    ///
    /// Returns the fetch error when the match page cannot be retrieved.
    pub async fn details(&self, id: &str) -> Result<MatchDetails> {
        let url = self.match_url(id)?;
        let page = parse_match_page(&self.fetcher.fetch(url.as_str()).await?);
        debug!(
            match_id = id,
            rows = page.table_rows.len(),
            statistics = page.statistics.len(),
            "Parsed match page"
        );

        Ok(MatchDetails {
            overview: page.overview,
            head_to_head: head_to_head_rows(&page.table_rows),
            statistics: page.statistics,
            standings: Standings {
                league: page.league,
                rows: standing_rows(&page.table_rows),
                last_updated: parse_last_updated(&page.standings_footer),
            },
        })
    }
}

/// Turn parsed league blocks into fixtures with Thai kick-off times.
#[must_use]
pub fn league_fixtures(sections: Vec<FixtureSection>, year: i32) -> Vec<LeagueFixtures> {
    sections
        .into_iter()
        .map(|section| LeagueFixtures {
            league: section.league,
            fixtures: section
                .cards
                .into_iter()
                .map(|card| Fixture {
                    id: card.link.as_deref().and_then(match_id_from_link),
                    schedule: Schedule::from_token(&card.date_text, year),
                    home: card.home,
                    away: card.away,
                    score: card.score,
                    link: card.link,
                })
                .collect(),
        })
        .collect()
}

/// Rows with exactly six cells, read as head-to-head meetings.
#[must_use]
pub fn head_to_head_rows(rows: &[TableRow]) -> Vec<HeadToHead> {
    rows.iter()
        .filter(|row| row.cells.len() == HEAD_TO_HEAD_CELLS)
        .map(|row| HeadToHead {
            competition: row.cell_text(0).to_string(),
            date: row.cell_text(1).to_string(),
            home: row.cell_text(2).to_string(),
            score: row.cell_text(3).to_string(),
            away: row.cell_text(4).to_string(),
            result: row.cell_text(5).to_string(),
        })
        .collect()
}

/// Rows with exactly ten cells, read as league table rows.
#[must_use]
pub fn standing_rows(rows: &[TableRow]) -> Vec<StandingRow> {
    let text = |row: &TableRow, i: usize| row.cell_text(i).to_string();
    rows.iter()
        .filter(|row| row.cells.len() == STANDING_CELLS)
        .map(|row| StandingRow {
            position: text(row, 0),
            team: Badge {
                name: text(row, 1),
                image: row.cells[1].image.as_ref().and_then(|img| img.src.clone()),
            },
            played: text(row, 2),
            won: text(row, 3),
            drawn: text(row, 4),
            lost: text(row, 5),
            goals_for: text(row, 6),
            goals_against: text(row, 7),
            goal_difference: text(row, 8),
            points: text(row, 9),
        })
        .collect()
}
