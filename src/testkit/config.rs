//! Canonical test configuration.
//!
//! Single source of truth for the config used across tests.

use crate::infrastructure::config::settings::Config;

/// Site root used by every fixture.
pub const BASE_URL: &str = "https://ratings.example.com";
/// Listing page URL used by every fixture.
pub const LISTING_URL: &str = "https://ratings.example.com/sure-bets";
/// Fixture listing of the match-centre site.
pub const FIXTURES_URL: &str = "https://matches.example.com/";
/// Match page base of the match-centre site.
pub const MATCH_PAGE_URL: &str = "https://matches.example.com/football/match/";
/// Chat id replies go to in tests.
pub const CHAT_ID: i64 = -1_001_234_567_890;

/// Config pointing at the fixture site with a `/tips` trigger.
pub fn config() -> Config {
    let mut config = Config::default();
    config.source.listing_url = LISTING_URL.to_string();
    config.source.site_base_url = BASE_URL.to_string();
    config.source.enrich_concurrency = 4;
    config.source.fixtures_url = FIXTURES_URL.to_string();
    config.source.match_page_url = MATCH_PAGE_URL.to_string();
    config.digest.trigger = "/tips".to_string();
    config.telegram.poll_interval_ms = 1000;
    config
}

/// Match page URL for `id`.
pub fn match_url(id: &str) -> String {
    format!("{MATCH_PAGE_URL}{id}")
}

/// Absolute URL for a fixture path.
pub fn url(path: &str) -> String {
    format!("{BASE_URL}{path}")
}
