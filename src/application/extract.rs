//! Row extraction: parsed listing rows to [`RawMatchRow`]s.

use tracing::debug;

use crate::domain::{
    parse_leading_f64, parse_leading_u32, League, OddsColumns, PriceMovement, RawMatchRow,
    TableRow, TeamLink,
};
use crate::error::{Error, Result};

/// Listing column positions.
mod col {
    pub const ODDS: usize = 1;
    pub const LEAGUE: usize = 2;
    pub const MATCH: usize = 3;
    pub const CONFIDENCE: usize = 4;
    pub const OPENING: usize = 5;
    pub const AVAILABLE: usize = 6;
    pub const DROPPING: usize = 7;
    pub const AVAILABLE_RATING: usize = 8;
    pub const CALCULATOR: usize = 9;
    pub const FORM: usize = 10;
}

/// Lazily extract match rows, skipping rows that don't qualify.
///
/// The returned iterator is tied to one page's rows and is not restartable.
pub fn extract_rows<I>(rows: I) -> impl Iterator<Item = RawMatchRow>
where
    I: IntoIterator<Item = TableRow>,
{
    rows.into_iter()
        .filter(|row| !row.cells.is_empty())
        .filter_map(|row| match extract_row(&row) {
            Ok(extracted) => Some(extracted),
            Err(e) => {
                debug!(reason = %e, cells = row.cells.len(), "Skipping listing row");
                None
            }
        })
}

/// Extract a single row.
///
/// # Errors
///
/// Returns [`Error::ParseMiss`] when a required column (odds, league, match,
/// confidence) is empty, odds or confidence are not numeric, or the match
/// cell does not link both teams.
pub fn extract_row(row: &TableRow) -> Result<RawMatchRow> {
    let required = [col::ODDS, col::LEAGUE, col::MATCH, col::CONFIDENCE];
    if let Some(&missing) = required.iter().find(|&&i| row.cell_text(i).is_empty()) {
        return Err(Error::ParseMiss(format!("column {missing} is empty")));
    }

    let odds = parse_leading_f64(row.cell_text(col::ODDS)).ok_or_else(|| {
        Error::ParseMiss(format!("odds `{}` are not numeric", row.cell_text(col::ODDS)))
    })?;
    let confidence = parse_leading_u32(row.cell_text(col::CONFIDENCE)).ok_or_else(|| {
        Error::ParseMiss(format!(
            "confidence `{}` is not numeric",
            row.cell_text(col::CONFIDENCE)
        ))
    })?;

    let match_cell = &row.cells[col::MATCH];
    let (home, away) = match (match_cell.first_link(), match_cell.last_link()) {
        (Some(home), Some(away)) if match_cell.links.len() >= 2 => (home, away),
        _ => {
            return Err(Error::ParseMiss(format!(
                "match cell `{}` does not link both teams",
                match_cell.text
            )))
        }
    };

    let league_cell = &row.cells[col::LEAGUE];
    let league = League {
        code: league_cell
            .first_link()
            .map_or_else(|| league_cell.text.clone(), |a| a.text.clone()),
        flag: league_cell.image.as_ref().and_then(|img| img.src.clone()),
    };
    let schedule_token = league_cell
        .image
        .as_ref()
        .and_then(|img| img.title.as_deref())
        .and_then(|title| title.split(',').next())
        .unwrap_or_default()
        .trim()
        .to_string();

    Ok(RawMatchRow {
        odds,
        odds_text: row.cell_text(col::ODDS).to_string(),
        league,
        home: TeamLink::new(home.text.trim(), home.href.as_deref()),
        away: TeamLink::new(away.text.trim(), away.href.as_deref()),
        confidence,
        columns: OddsColumns {
            opening: row.cell_text(col::OPENING).to_string(),
            available: row.cell_text(col::AVAILABLE).to_string(),
            dropping: row.cell_text(col::DROPPING).to_string(),
            available_rating: row.cell_text(col::AVAILABLE_RATING).to_string(),
            calculator: row.cell_text(col::CALCULATOR).to_string(),
            form: row.cell_text(col::FORM).to_string(),
        },
        price_movement: PriceMovement::from_cell_text(&match_cell.text),
        schedule_token,
        emphasized: row.emphasized.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CellImage, CellLink, TableCell};

    fn link(text: &str, href: &str) -> CellLink {
        CellLink {
            text: text.into(),
            href: Some(href.into()),
        }
    }

    fn listing_row(odds: &str, confidence: &str) -> TableRow {
        let league = TableCell {
            text: "E0".into(),
            links: vec![link("E0", "/league/E0")],
            image: Some(CellImage {
                src: Some("/flags/en.png".into()),
                title: Some("15/03 20:00, Premier League".into()),
            }),
        };
        let teams = TableCell {
            text: "Arsenal - Chelsea".into(),
            links: vec![link("Arsenal", "/team/arsenal"), link("Chelsea", "/team/chelsea")],
            image: None,
        };
        let mut cells = vec![
            TableCell::text("1"),
            TableCell::text(odds),
            league,
            teams,
            TableCell::text(confidence),
        ];
        cells.extend(
            ["1.90", "1.88", "-2%", "1.80", "1.75", "WWD"]
                .into_iter()
                .map(TableCell::text),
        );
        TableRow {
            cells,
            emphasized: Some("Chelsea".into()),
        }
    }

    #[test]
    fn extracts_all_columns() {
        let row = extract_row(&listing_row("1.85", "9")).unwrap();
        assert!((row.odds - 1.85).abs() < f64::EPSILON);
        assert_eq!(row.confidence, 9);
        assert_eq!(row.league.code, "E0");
        assert_eq!(row.league.flag.as_deref(), Some("/flags/en.png"));
        assert_eq!(row.home.name, "Arsenal");
        assert_eq!(row.away.href.as_deref(), Some("/team/chelsea"));
        assert_eq!(row.schedule_token, "15/03 20:00");
        assert_eq!(row.columns.opening, "1.90");
        assert_eq!(row.columns.form, "WWD");
        assert_eq!(row.price_movement, PriceMovement::Down);
        assert_eq!(row.emphasized.as_deref(), Some("Chelsea"));
    }

    #[test]
    fn available_odds_come_from_the_column_after_opening() {
        let row = extract_row(&listing_row("1.85", "9")).unwrap();
        assert_eq!(row.columns.available, "1.88");
        assert_eq!(row.columns.dropping, "-2%");
        assert_eq!(row.columns.available_rating, "1.80");
        assert_eq!(row.columns.calculator, "1.75");
    }

    #[test]
    fn odds_text_keeps_trailing_zeros() {
        let row = extract_row(&listing_row("2.10", "9")).unwrap();
        assert_eq!(row.odds_text, "2.10");
        assert!((row.odds - 2.1).abs() < f64::EPSILON);
    }

    #[test]
    fn up_arrow_in_match_cell_flags_price_movement() {
        let mut row = listing_row("1.85", "9");
        row.cells[3].text = "Arsenal ⬆️ - Chelsea".into();
        assert_eq!(extract_row(&row).unwrap().price_movement, PriceMovement::Up);
    }

    #[test]
    fn non_numeric_odds_disqualify_the_row() {
        assert!(matches!(
            extract_row(&listing_row("n/a", "9")),
            Err(Error::ParseMiss(reason)) if reason.contains("odds")
        ));
    }

    #[test]
    fn empty_required_column_is_skipped() {
        assert!(matches!(
            extract_row(&listing_row("1.85", "")),
            Err(Error::ParseMiss(reason)) if reason.contains("column 4")
        ));
        assert!(extract_row(&TableRow::default()).is_err());
    }

    #[test]
    fn short_rows_are_skipped() {
        let row = TableRow::new(vec![TableCell::text("1"), TableCell::text("1.85")]);
        assert!(extract_row(&row).is_err());
    }

    #[test]
    fn single_team_link_is_a_parse_miss() {
        let mut row = listing_row("1.85", "9");
        row.cells[3].links.truncate(1);
        assert!(matches!(
            extract_row(&row),
            Err(Error::ParseMiss(reason)) if reason.contains("both teams")
        ));
    }

    #[test]
    fn optional_columns_default_to_empty() {
        let mut row = listing_row("2.10", "7");
        row.cells.truncate(5);
        let extracted = extract_row(&row).unwrap();
        assert_eq!(extracted.columns, OddsColumns::default());
    }

    #[test]
    fn extraction_is_lazy_and_filters() {
        let rows = vec![
            listing_row("1.85", "9"),
            TableRow::default(),
            listing_row("bad", "9"),
            listing_row("2.00", "6"),
        ];
        let extracted: Vec<_> = extract_rows(rows).collect();
        assert_eq!(extracted.len(), 2);
        assert_eq!(extracted[1].confidence, 6);
    }
}
