//! Deduplicated match records.

use std::collections::HashMap;

use serde::Serialize;
use url::Url;

use super::row::{League, OddsColumns, PriceMovement};
use super::schedule::Schedule;

/// Identity of a match for deduplication: home, away, raw schedule token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchKey {
    pub home: String,
    pub away: String,
    pub schedule_token: String,
}

impl MatchKey {
    pub fn new(
        home: impl Into<String>,
        away: impl Into<String>,
        schedule_token: impl Into<String>,
    ) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
            schedule_token: schedule_token.into(),
        }
    }
}

/// A team as it appears on a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub name: String,
    /// Absolute profile page URL, when the listing link resolved.
    pub profile_url: Option<Url>,
}

/// One distinct match, built from the first listing row carrying its key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    pub schedule: Schedule,
    pub league: League,
    pub home: Team,
    pub away: Team,
    pub odds: f64,
    /// Odds exactly as the listing printed them.
    pub odds_text: String,
    pub columns: OddsColumns,
    pub price_movement: PriceMovement,
    pub confidence: u32,
    /// The side the listing emphasizes.
    pub recommended: Option<String>,
}

/// Match records unique by [`MatchKey`], in first-seen order.
#[derive(Debug, Default)]
pub struct MatchBook {
    records: Vec<MatchRecord>,
    index: HashMap<MatchKey, usize>,
}

impl MatchBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a record exists for `key`.
    #[must_use]
    pub fn contains(&self, key: &MatchKey) -> bool {
        self.index.contains_key(key)
    }

    /// Insert a record unless its key is already present.
    ///
    /// Returns `true` when the record was inserted. The first record for a
    /// key always wins.
    pub fn insert_first(&mut self, key: MatchKey, record: MatchRecord) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.records.len());
        self.records.push(record);
        true
    }

    #[must_use]
    pub fn get(&self, key: &MatchKey) -> Option<&MatchRecord> {
        self.index.get(key).map(|&i| &self.records[i])
    }

    #[must_use]
    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    #[must_use]
    pub fn into_records(self) -> Vec<MatchRecord> {
        self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
