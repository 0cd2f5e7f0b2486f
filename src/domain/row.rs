//! Listing rows after extraction.

use serde::Serialize;

/// League identity as shown in the listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct League {
    pub code: String,
    pub flag: Option<String>,
}

/// A team name together with its (possibly relative) profile link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamLink {
    pub name: String,
    pub href: Option<String>,
}

impl TeamLink {
    pub fn new(name: impl Into<String>, href: Option<&str>) -> Self {
        Self {
            name: name.into(),
            href: href.map(str::to_owned),
        }
    }
}

/// The optional odds-analysis columns trailing the required ones.
///
/// Kept as display strings; empty when the listing omits a column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OddsColumns {
    pub opening: String,
    /// Odds currently on offer, shown as "Available Odds".
    pub available: String,
    pub dropping: String,
    /// The site's rating of the available odds.
    pub available_rating: String,
    pub calculator: String,
    pub form: String,
}

/// Direction of the latest price move, flagged next to the teams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceMovement {
    Up,
    #[default]
    Down,
}

impl PriceMovement {
    /// `Up` when the match cell carries the up-arrow marker.
    #[must_use]
    pub fn from_cell_text(text: &str) -> Self {
        if text.contains('⬆') {
            Self::Up
        } else {
            Self::Down
        }
    }

    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Up => "⬆️",
            Self::Down => "⬇️",
        }
    }
}

/// One listing row that passed extraction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawMatchRow {
    /// Odds as a number, used to qualify the row.
    pub odds: f64,
    /// Odds exactly as printed, used for display.
    pub odds_text: String,
    pub league: League,
    pub home: TeamLink,
    pub away: TeamLink,
    pub confidence: u32,
    pub columns: OddsColumns,
    pub price_movement: PriceMovement,
    /// Schedule as printed by the site, e.g. `"15/03 20:00"`.
    pub schedule_token: String,
    /// Team name the row renders in bold.
    pub emphasized: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_arrow_marks_an_upward_move() {
        assert_eq!(
            PriceMovement::from_cell_text("Arsenal ⬆️ - Chelsea"),
            PriceMovement::Up
        );
        assert_eq!(
            PriceMovement::from_cell_text("Arsenal - Chelsea"),
            PriceMovement::Down
        );
    }

    #[test]
    fn movement_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PriceMovement::Up).unwrap(),
            "\"up\""
        );
    }
}
