//! Rating enrichment.
//!
//! Each record's home team profile page is fetched and its
//! `Team Ratings (H/A)` row read. Fetches run concurrently up to a fixed
//! limit; every record settles (enriched or zero fallback) before the
//! results are returned, in input order.

use std::sync::Arc;

use futures_util::stream::{self, StreamExt};
use tracing::{info, warn};

use crate::adapter::outbound::html::parse_table_rows;
use crate::domain::{
    parse_leading_f64, EnrichFailure, EnrichedMatch, MatchBook, MatchRecord, RatingPair,
    TableRow, TeamRatings,
};
use crate::error::Error;
use crate::port::PageFetcher;

/// Label of the profile table row carrying home/away ratings.
pub const RATINGS_LABEL: &str = "Team Ratings (H/A)";

/// Attaches team ratings to match records.
#[derive(Clone)]
pub struct RatingEnricher {
    fetcher: Arc<dyn PageFetcher>,
    concurrency: usize,
}

impl RatingEnricher {
    /// Create an enricher running at most `concurrency` fetches at once.
    #[must_use]
    pub fn new(fetcher: Arc<dyn PageFetcher>, concurrency: usize) -> Self {
        Self {
            fetcher,
            concurrency: concurrency.max(1),
        }
    }

    /// Enrich every record in `book`.
    ///
    /// Never fails: a record whose enrichment fails carries zero ratings and
    /// the failure reason, and no other record is affected.
    pub async fn enrich_all(&self, book: MatchBook) -> Vec<EnrichedMatch> {
        let total = book.len();
        let enriched: Vec<EnrichedMatch> = stream::iter(book.into_records())
            .map(|record| self.enrich(record))
            .buffered(self.concurrency)
            .collect()
            .await;

        let failed = enriched.iter().filter(|m| !m.is_enriched()).count();
        info!(total, failed, "Enrichment complete");
        enriched
    }

    /// Enrich a single record.
    pub async fn enrich(&self, record: MatchRecord) -> EnrichedMatch {
        match self.fetch_ratings(&record).await {
            Ok(ratings) => EnrichedMatch::enriched(record, RatingPair::mirrored(ratings)),
            Err(failure) => {
                warn!(
                    home = %record.home.name,
                    away = %record.away.name,
                    reason = %failure,
                    "Rating enrichment failed, using zero ratings"
                );
                EnrichedMatch::failed(record, failure)
            }
        }
    }

    async fn fetch_ratings(&self, record: &MatchRecord) -> Result<TeamRatings, EnrichFailure> {
        let url = record
            .home
            .profile_url
            .as_ref()
            .ok_or(EnrichFailure::NoProfileUrl)?;

        let body = self.fetcher.fetch(url.as_str()).await.map_err(|e| match e {
            Error::FetchTimeout { .. } => EnrichFailure::Timeout,
            other => EnrichFailure::Fetch(other.to_string()),
        })?;

        team_ratings(&parse_table_rows(&body)).ok_or(EnrichFailure::MissingRatings)
    }
}

/// Read the ratings row from a profile page's rows.
///
/// The last matching row wins; unparsable values read as 0.
#[must_use]
pub fn team_ratings(rows: &[TableRow]) -> Option<TeamRatings> {
    rows.iter()
        .rev()
        .find(|row| row.label() == RATINGS_LABEL)
        .map(|row| {
            TeamRatings::new(
                parse_leading_f64(row.cell_text(1)).unwrap_or(0.0),
                parse_leading_f64(row.cell_text(2)).unwrap_or(0.0),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TableCell;

    fn ratings_row(home: &str, away: &str) -> TableRow {
        TableRow::new(vec![
            TableCell::text(RATINGS_LABEL),
            TableCell::text(home),
            TableCell::text(away),
        ])
    }

    #[test]
    fn reads_ratings_row() {
        let rows = vec![
            TableRow::new(vec![TableCell::text("Goals"), TableCell::text("12")]),
            ratings_row("1.45", "0.98"),
        ];
        let ratings = team_ratings(&rows).unwrap();
        assert!((ratings.home - 1.45).abs() < f64::EPSILON);
        assert!((ratings.away - 0.98).abs() < f64::EPSILON);
    }

    #[test]
    fn unparsable_values_read_as_zero() {
        let ratings = team_ratings(&[ratings_row("-", "")]).unwrap();
        assert_eq!(ratings, TeamRatings::ZERO);
    }

    #[test]
    fn missing_row_is_none() {
        assert!(team_ratings(&[]).is_none());
        let rows = vec![TableRow::new(vec![TableCell::text("Team Ratings")])];
        assert!(team_ratings(&rows).is_none());
    }
}
