//! Team ratings and enriched matches.

use serde::Serialize;
use thiserror::Error;

use super::record::MatchRecord;

/// The "Team Ratings (H/A)" pair read from a team profile page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TeamRatings {
    pub home: f64,
    pub away: f64,
}

impl TeamRatings {
    pub const ZERO: Self = Self {
        home: 0.0,
        away: 0.0,
    };

    #[must_use]
    pub const fn new(home: f64, away: f64) -> Self {
        Self { home, away }
    }
}

/// Ratings attached to a match, one slot per side.
///
/// Only the home team's profile is fetched, so both slots hold the same
/// pair; the digest reads `home.home` and `away.away`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RatingPair {
    pub home: TeamRatings,
    pub away: TeamRatings,
}

impl RatingPair {
    /// Fallback used when enrichment fails.
    pub const ZERO: Self = Self {
        home: TeamRatings::ZERO,
        away: TeamRatings::ZERO,
    };

    /// Both slots set to the same pair.
    #[must_use]
    pub const fn mirrored(ratings: TeamRatings) -> Self {
        Self {
            home: ratings,
            away: ratings,
        }
    }

    /// Rating shown for the home side.
    #[must_use]
    pub const fn home_rating(&self) -> f64 {
        self.home.home
    }

    /// Rating shown for the away side.
    #[must_use]
    pub const fn away_rating(&self) -> f64 {
        self.away.away
    }
}

/// Why a match kept the zero rating fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnrichFailure {
    #[error("profile fetch timed out")]
    Timeout,

    #[error("profile fetch failed: {0}")]
    Fetch(String),

    #[error("home team has no resolvable profile URL")]
    NoProfileUrl,

    #[error("profile page has no Team Ratings (H/A) row")]
    MissingRatings,
}

/// A match record with its ratings settled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedMatch {
    pub record: MatchRecord,
    pub ratings: RatingPair,
    /// Set when `ratings` is the zero fallback rather than fetched data.
    #[serde(skip)]
    pub failure: Option<EnrichFailure>,
}

impl EnrichedMatch {
    #[must_use]
    pub fn enriched(record: MatchRecord, ratings: RatingPair) -> Self {
        Self {
            record,
            ratings,
            failure: None,
        }
    }

    #[must_use]
    pub fn failed(record: MatchRecord, failure: EnrichFailure) -> Self {
        Self {
            record,
            ratings: RatingPair::ZERO,
            failure: Some(failure),
        }
    }

    #[must_use]
    pub fn confidence(&self) -> u32 {
        self.record.confidence
    }

    #[must_use]
    pub fn is_enriched(&self) -> bool {
        self.failure.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrored_pair_reads_home_and_away_columns() {
        let pair = RatingPair::mirrored(TeamRatings::new(7.5, 6.0));
        assert_eq!(pair.home, pair.away);
        assert_eq!(pair.home_rating(), 7.5);
        assert_eq!(pair.away_rating(), 6.0);
    }

    #[test]
    fn zero_fallback_is_default() {
        assert_eq!(RatingPair::ZERO, RatingPair::default());
        assert_eq!(RatingPair::ZERO.home_rating(), 0.0);
    }
}
