//! Application services (use cases).
//!
//! The tip pipeline runs leaf-first: extract rows from the listing,
//! deduplicate them into match records, enrich each record with team
//! ratings, then filter and rank by confidence. The digest module renders
//! the ranked set and the poller drives the whole flow from bot commands.
//! The match centre answers fixture, head-to-head and match detail lookups.

pub mod dedup;
pub mod digest;
pub mod enrich;
pub mod extract;
pub mod match_centre;
pub mod pipeline;
pub mod poller;
pub mod rank;

pub use digest::{Digest, TextStyle};
pub use enrich::RatingEnricher;
pub use match_centre::MatchCentre;
pub use pipeline::TipPipeline;
pub use poller::{CommandPoller, PollState};
