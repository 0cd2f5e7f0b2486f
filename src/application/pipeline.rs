//! The tip pipeline: listing page to ranked digest.

use std::sync::Arc;

use tracing::{debug, info};
use url::Url;

use super::dedup::deduplicate;
use super::digest::Digest;
use super::enrich::RatingEnricher;
use super::extract::extract_rows;
use super::rank::rank;
use crate::adapter::outbound::html::parse_table_rows;
use crate::domain::{bangkok_year_now, MatchBook};
use crate::error::Result;
use crate::infrastructure::config::source::SourceConfig;
use crate::port::PageFetcher;

/// Fetches the listing and runs extract, dedup, enrich and rank.
#[derive(Clone)]
pub struct TipPipeline {
    fetcher: Arc<dyn PageFetcher>,
    enricher: RatingEnricher,
    listing_url: String,
    base_url: Url,
    year: Option<i32>,
}

impl TipPipeline {
    /// Build a pipeline over `fetcher` for the configured source.
    ///
    /// # Errors
    ///
    /// Returns an error if `site_base_url` is not an absolute URL.
    pub fn new(fetcher: Arc<dyn PageFetcher>, source: &SourceConfig) -> Result<Self> {
        let base_url = Url::parse(&source.site_base_url)?;
        Ok(Self {
            enricher: RatingEnricher::new(Arc::clone(&fetcher), source.enrich_concurrency),
            fetcher,
            listing_url: source.listing_url.clone(),
            base_url,
            year: None,
        })
    }

    /// Pin the year schedule tokens are read in (defaults to the current
    /// Bangkok year).
    #[must_use]
    pub const fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Fetch the listing and deduplicate it into match records.
    ///
    /// # Errors
    ///
    /// Returns the fetch error when the listing page cannot be retrieved.
    pub async fn records(&self) -> Result<MatchBook> {
        let body = self.fetcher.fetch(&self.listing_url).await?;
        let rows = parse_table_rows(&body);
        debug!(rows = rows.len(), url = %self.listing_url, "Parsed listing");

        let year = self.year.unwrap_or_else(bangkok_year_now);
        Ok(deduplicate(extract_rows(rows), &self.base_url, year))
    }

    /// Run the whole pipeline at `min_confidence`.
    ///
    /// Enrichment failures never fail the run; only the listing fetch can.
    ///
    /// # Errors
    ///
    /// Returns the fetch error when the listing page cannot be retrieved.
    pub async fn run(&self, min_confidence: u32) -> Result<Digest> {
        let book = self.records().await?;
        let records = book.len();
        let enriched = self.enricher.enrich_all(book).await;
        let ranked = rank(enriched, min_confidence);

        info!(
            records,
            selected = ranked.len(),
            min_confidence,
            "Pipeline complete"
        );
        Ok(Digest::new(min_confidence, ranked))
    }
}
