//! Site-agnostic domain types for the match digest pipeline.
//!
//! Each pipeline stage owns an explicit record type:
//!
//! - [`TableRow`] - labeled cell values produced by the document parser
//! - [`RawMatchRow`] - one listing row after extraction
//! - [`MatchRecord`] - one distinct match after deduplication
//! - [`EnrichedMatch`] - a record with team ratings attached
//!
//! The match-centre commands read [`FixtureSection`]s and [`MatchPage`]s
//! and report [`LeagueFixtures`] and [`MatchDetails`].

mod command;
mod fixture;
mod number;
mod rating;
mod record;
mod row;
mod schedule;
mod table;
mod tier;

pub use command::{command_help, BotCommand, CommandParseError};
pub use fixture::{
    match_id_from_link, parse_last_updated, Badge, Fixture, FixtureCard, FixtureSection,
    HeadToHead, LeagueFixtures, MatchDetails, MatchOverview, MatchPage, StandingRow, Standings,
    StatLine,
};
pub use number::{parse_leading_f64, parse_leading_u32};
pub use rating::{EnrichFailure, EnrichedMatch, RatingPair, TeamRatings};
pub use record::{MatchBook, MatchKey, MatchRecord, Team};
pub use row::{League, OddsColumns, PriceMovement, RawMatchRow, TeamLink};
pub use schedule::{bangkok_year_now, Schedule};
pub use table::{CellImage, CellLink, TableCell, TableRow};
pub use tier::RecommendationTier;
