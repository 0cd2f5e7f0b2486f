//! Listing source configuration.

use std::time::Duration;

use serde::Deserialize;

/// Where the listing, team profile and match-centre pages come from, and
/// how to fetch them.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Sure-bets listing page.
    #[serde(default = "default_listing_url")]
    pub listing_url: String,
    /// Base that relative team profile links resolve against.
    #[serde(default = "default_site_base_url")]
    pub site_base_url: String,
    /// Per-request timeout for every page fetch (default: 10).
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
    /// Maximum team profile fetches in flight (default: 8).
    #[serde(default = "default_enrich_concurrency")]
    pub enrich_concurrency: usize,
    /// Fixture listing of the match-centre site.
    #[serde(default = "default_fixtures_url")]
    pub fixtures_url: String,
    /// Match page base; a match id is appended as the last path segment.
    #[serde(default = "default_match_page_url")]
    pub match_page_url: String,
    /// User agent sent with page requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_listing_url() -> String {
    "https://www.soccer-rating.com/sure-bets".to_string()
}

fn default_site_base_url() -> String {
    "https://www.soccer-rating.com".to_string()
}

fn default_fixtures_url() -> String {
    "https://dookeela.live/".to_string()
}

fn default_match_page_url() -> String {
    "https://dookeela.live/football/match/".to_string()
}

const fn default_fetch_timeout_secs() -> u64 {
    10
}

const fn default_enrich_concurrency() -> usize {
    8
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/120.0.0.0 Safari/537.36"
        .to_string()
}

impl SourceConfig {
    #[must_use]
    pub const fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            listing_url: default_listing_url(),
            site_base_url: default_site_base_url(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            enrich_concurrency: default_enrich_concurrency(),
            fixtures_url: default_fixtures_url(),
            match_page_url: default_match_page_url(),
            user_agent: default_user_agent(),
        }
    }
}
