//! Pipeline tests against scripted pages.

use std::sync::Arc;

use tipster::application::digest::NO_MATCHES_MESSAGE;
use tipster::application::{TextStyle, TipPipeline};
use tipster::domain::{EnrichFailure, PriceMovement, TeamRatings};
use tipster::error::Error;
use tipster::testkit::config::{self, LISTING_URL};
use tipster::testkit::fetch::StaticFetcher;
use tipster::testkit::html::{listing_page, profile_page, team_path, ListingRow};

fn pipeline(fetcher: &Arc<StaticFetcher>) -> TipPipeline {
    TipPipeline::new(fetcher.clone(), &config::config().source)
        .unwrap()
        .with_year(2025)
}

fn profile_url(team: &str) -> String {
    config::url(&team_path(team))
}

#[tokio::test]
async fn duplicate_rows_failed_enrichment_and_threshold() {
    let listing = listing_page(&[
        ListingRow::new("Arsenal", "Chelsea", "15/03 20:00", "1.85", 9).emphasize("Chelsea"),
        ListingRow::new("Arsenal", "Chelsea", "15/03 20:00", "2.40", 9).league("XX"),
        ListingRow::new("Milan", "Roma", "16/03 18:00", "2.10", 7),
    ]);
    let fetcher = Arc::new(
        StaticFetcher::new()
            .with_page(LISTING_URL, listing)
            .with_page(profile_url("Arsenal"), profile_page("1.45", "0.98"))
            .with_timeout(profile_url("Milan")),
    );

    let digest = pipeline(&fetcher).run(8).await.unwrap();

    assert_eq!(digest.matches.len(), 1);
    let top = &digest.matches[0];
    assert_eq!(top.record.home.name, "Arsenal");
    assert!((top.record.odds - 1.85).abs() < f64::EPSILON);
    assert_eq!(top.record.league.code, "E0");
    assert_eq!(top.record.recommended.as_deref(), Some("Chelsea"));
    assert_eq!(top.ratings.home, TeamRatings::new(1.45, 0.98));
    assert!(top.is_enriched());

    // One listing fetch plus one profile fetch per distinct match.
    let requests = fetcher.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0], LISTING_URL);

    let messages = digest.messages(TextStyle::Markdown, 4096);
    assert_eq!(messages.len(), 1);
    let text = &messages[0];
    assert!(text.contains("\\(ความมั่นใจ 8\\+\\)"));
    assert!(text.contains("พบทั้งหมด 1 คู่"));
    assert!(text.contains("Arsenal 🟢 vs Chelsea 🔴"));
    assert!(text.contains("ราคาปัจจุบัน: 1\\.85"));
    assert!(text.contains("ทีมแนะนำ: Chelsea"));
    assert!(!text.contains("Milan"));
}

#[tokio::test]
async fn failed_enrichment_falls_back_to_zero_with_reason() {
    let listing = listing_page(&[ListingRow::new("Milan", "Roma", "16/03 18:00", "2.10", 9)]);
    let fetcher = Arc::new(
        StaticFetcher::new()
            .with_page(LISTING_URL, listing)
            .with_timeout(profile_url("Milan")),
    );

    let digest = pipeline(&fetcher).run(0).await.unwrap();

    assert_eq!(digest.matches.len(), 1);
    let only = &digest.matches[0];
    assert_eq!(only.ratings.home, TeamRatings::ZERO);
    assert_eq!(only.ratings.away, TeamRatings::ZERO);
    assert_eq!(only.failure, Some(EnrichFailure::Timeout));
}

#[tokio::test]
async fn one_failing_profile_leaves_siblings_untouched() {
    let teams = ["Alpha", "Bravo", "Charlie", "Delta", "Echo"];
    let rows: Vec<_> = teams
        .iter()
        .map(|t| ListingRow::new(t, "Visitors", "20/04 19:45", "1.70", 8))
        .collect();

    let all_ok = teams.iter().enumerate().fold(
        StaticFetcher::new().with_page(LISTING_URL, listing_page(&rows)),
        |f, (i, t)| f.with_page(profile_url(t), profile_page(&format!("1.{i}"), "0.5")),
    );
    let one_failing = teams.iter().enumerate().fold(
        StaticFetcher::new().with_page(LISTING_URL, listing_page(&rows)),
        |f, (i, t)| {
            if *t == "Charlie" {
                f.with_failure(profile_url(t), "connection reset")
            } else {
                f.with_page(profile_url(t), profile_page(&format!("1.{i}"), "0.5"))
            }
        },
    );

    let baseline = pipeline(&Arc::new(all_ok)).run(0).await.unwrap();
    let degraded = pipeline(&Arc::new(one_failing)).run(0).await.unwrap();

    assert_eq!(baseline.matches.len(), teams.len());
    assert_eq!(degraded.matches.len(), teams.len());
    for (ok, maybe) in baseline.matches.iter().zip(&degraded.matches) {
        assert_eq!(ok.record.home.name, maybe.record.home.name);
        if maybe.record.home.name == "Charlie" {
            assert!(!maybe.is_enriched());
            assert!(matches!(maybe.failure, Some(EnrichFailure::Fetch(_))));
            assert_eq!(maybe.ratings.home, TeamRatings::ZERO);
        } else {
            assert_eq!(ok, maybe);
        }
    }
}

#[tokio::test]
async fn profile_without_ratings_row_is_a_failure() {
    let listing = listing_page(&[ListingRow::new("Porto", "Braga", "01/05 20:00", "1.60", 9)]);
    let fetcher = Arc::new(
        StaticFetcher::new()
            .with_page(LISTING_URL, listing)
            .with_page(
                profile_url("Porto"),
                tipster::testkit::html::profile_page_without_ratings(),
            ),
    );

    let digest = pipeline(&fetcher).run(8).await.unwrap();
    assert_eq!(digest.matches[0].failure, Some(EnrichFailure::MissingRatings));
}

#[tokio::test]
async fn enrichment_respects_concurrency_limit() {
    let teams = ["A1", "A2", "A3", "A4", "A5", "A6", "A7", "A8"];
    let rows: Vec<_> = teams
        .iter()
        .map(|t| ListingRow::new(t, "Away", "10/10 10:00", "1.50", 9))
        .collect();
    let fetcher = teams.iter().fold(
        StaticFetcher::new().with_page(LISTING_URL, listing_page(&rows)),
        |f, t| f.with_page(profile_url(t), profile_page("1.0", "1.0")),
    );
    let fetcher = Arc::new(fetcher);

    let mut cfg = config::config();
    cfg.source.enrich_concurrency = 2;
    let pipeline = TipPipeline::new(fetcher.clone(), &cfg.source)
        .unwrap()
        .with_year(2025);

    let digest = pipeline.run(0).await.unwrap();
    assert_eq!(digest.matches.len(), teams.len());
    assert!(fetcher.max_in_flight() <= 2);
    let names: Vec<_> = digest
        .matches
        .iter()
        .map(|m| m.record.home.name.as_str())
        .collect();
    assert_eq!(names, teams);
}

#[tokio::test]
async fn empty_listing_yields_single_no_matches_message() {
    let fetcher = Arc::new(StaticFetcher::new().with_page(LISTING_URL, listing_page(&[])));

    let digest = pipeline(&fetcher).run(8).await.unwrap();

    assert!(digest.is_empty());
    assert_eq!(
        digest.messages(TextStyle::Markdown, 4096),
        vec![NO_MATCHES_MESSAGE.to_string()]
    );
    assert_eq!(fetcher.requests(), vec![LISTING_URL.to_string()]);
}

#[tokio::test]
async fn listing_fetch_failure_is_returned() {
    let fetcher = Arc::new(StaticFetcher::new().with_timeout(LISTING_URL));

    let result = pipeline(&fetcher).run(8).await;

    assert!(matches!(result, Err(Error::FetchTimeout { .. })));
}

#[tokio::test]
async fn records_are_deduplicated_in_first_seen_order() {
    let listing = listing_page(&[
        ListingRow::new("Lyon", "Nice", "02/02 19:00", "1.90", 6),
        ListingRow::new("Ajax", "PSV", "02/02 17:00", "2.00", 9),
        ListingRow::new("Lyon", "Nice", "02/02 19:00", "1.10", 10),
    ]);
    let fetcher = Arc::new(StaticFetcher::new().with_page(LISTING_URL, listing));

    let book = pipeline(&fetcher).records().await.unwrap();

    let names: Vec<_> = book.records().iter().map(|r| r.home.name.as_str()).collect();
    assert_eq!(names, vec!["Lyon", "Ajax"]);
    assert_eq!(book.records()[0].confidence, 6);
    assert_eq!(book.records()[0].columns.available, "1.90");
    assert_eq!(book.records()[0].columns.available_rating, "1.88");
}

#[tokio::test]
async fn digest_shows_odds_as_printed_and_available_odds() {
    let listing = listing_page(&[
        ListingRow::new("Porto", "Braga", "05/04 18:30", "2.10", 9).price_up(),
    ]);
    let fetcher = Arc::new(
        StaticFetcher::new()
            .with_page(LISTING_URL, listing)
            .with_page(profile_url("Porto"), profile_page("1.30", "1.10")),
    );

    let digest = pipeline(&fetcher).run(8).await.unwrap();

    let record = &digest.matches[0].record;
    assert_eq!(record.odds_text, "2.10");
    assert_eq!(record.price_movement, PriceMovement::Up);
    let text = digest.render(TextStyle::Plain);
    assert!(text.contains("▫️ ราคาปัจจุบัน: 2.10\n"));
    assert!(text.contains("▫️ Available Odds: 1.90\n"));
    assert!(text.contains("▫️ Opening Odds: 1.95\n"));
}
