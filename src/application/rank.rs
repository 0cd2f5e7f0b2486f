//! Confidence filtering and ranking.

use crate::domain::EnrichedMatch;

/// Keep matches with confidence `>= min_confidence`, highest first.
///
/// The sort is stable: equal confidences keep their input order.
#[must_use]
pub fn rank(matches: Vec<EnrichedMatch>, min_confidence: u32) -> Vec<EnrichedMatch> {
    let mut selected: Vec<EnrichedMatch> = matches
        .into_iter()
        .filter(|m| m.confidence() >= min_confidence)
        .collect();
    selected.sort_by(|a, b| b.confidence().cmp(&a.confidence()));
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        League, MatchRecord, OddsColumns, PriceMovement, RatingPair, Schedule, Team,
    };

    fn enriched(name: &str, confidence: u32) -> EnrichedMatch {
        let team = |n: &str| Team {
            name: n.into(),
            profile_url: None,
        };
        EnrichedMatch::enriched(
            MatchRecord {
                schedule: Schedule::default(),
                league: League::default(),
                home: team(name),
                away: team("Opponent"),
                odds: 1.5,
                odds_text: "1.50".into(),
                columns: OddsColumns::default(),
                price_movement: PriceMovement::Down,
                confidence,
                recommended: None,
            },
            RatingPair::ZERO,
        )
    }

    fn names(matches: &[EnrichedMatch]) -> Vec<&str> {
        matches.iter().map(|m| m.record.home.name.as_str()).collect()
    }

    #[test]
    fn keeps_only_matches_at_or_above_threshold() {
        let input = vec![enriched("a", 7), enriched("b", 8), enriched("c", 10)];
        let ranked = rank(input, 8);
        assert_eq!(names(&ranked), vec!["c", "b"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let input = vec![
            enriched("first", 9),
            enriched("low", 8),
            enriched("second", 9),
            enriched("top", 10),
            enriched("third", 9),
        ];
        let ranked = rank(input, 0);
        assert_eq!(names(&ranked), vec!["top", "first", "second", "third", "low"]);
    }

    #[test]
    fn output_is_non_increasing_for_every_threshold() {
        let confidences = [3, 9, 5, 8, 8, 10, 0, 6, 7, 9];
        for threshold in 0..=11 {
            let input: Vec<_> = confidences
                .iter()
                .enumerate()
                .map(|(i, &c)| enriched(&i.to_string(), c))
                .collect();
            let ranked = rank(input, threshold);
            let expected = confidences.iter().filter(|&&c| c >= threshold).count();
            assert_eq!(ranked.len(), expected);
            assert!(ranked.windows(2).all(|w| w[0].confidence() >= w[1].confidence()));
        }
    }

    #[test]
    fn empty_selection_is_not_an_error() {
        assert!(rank(vec![enriched("a", 5)], 8).is_empty());
        assert!(rank(Vec::new(), 8).is_empty());
    }
}
