//! Digest rendering.
//!
//! A digest is a header (threshold and match count) followed by one
//! fragment per ranked match. Telegram output is `MarkdownV2` with every
//! dynamic value escaped; the plain style is for terminals.

use crate::adapter::outbound::telegram::format::{escape_markdown, split_messages};
use crate::domain::{EnrichedMatch, RecommendationTier};

/// Sent instead of a digest when no match passes the threshold.
pub const NO_MATCHES_MESSAGE: &str = "❌ ไม่พบทีเด็ดที่ตรงตามเงื่อนไข";

/// Sent when the listing page cannot be fetched while serving a command.
pub const FETCH_FAILED_MESSAGE: &str = "⚠️ ไม่สามารถดึงข้อมูลทีเด็ดได้ในขณะนี้ กรุณาลองใหม่ภายหลัง";

const FAVORED: &str = "🟢";
const UNFAVORED: &str = "🔴";
const DIVIDER: &str = "➖➖➖➖➖➖➖➖➖➖";
const HEADER_RULE: &str = "──────────────";

/// Output markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Telegram `MarkdownV2`.
    Markdown,
    /// Unescaped text without bold markers.
    Plain,
}

impl TextStyle {
    fn escape(self, text: &str) -> String {
        match self {
            Self::Markdown => escape_markdown(text),
            Self::Plain => text.to_string(),
        }
    }

    fn bold(self, text: &str) -> String {
        match self {
            Self::Markdown => format!("*{}*", escape_markdown(text)),
            Self::Plain => text.to_string(),
        }
    }
}

/// Indicators for (home, away): the strictly higher rating is favored;
/// equal ratings mark both sides unfavored.
#[must_use]
pub fn indicators(home_rating: f64, away_rating: f64) -> (&'static str, &'static str) {
    let home = if home_rating > away_rating { FAVORED } else { UNFAVORED };
    let away = if away_rating > home_rating { FAVORED } else { UNFAVORED };
    (home, away)
}

/// Render one match.
#[must_use]
pub fn format_fragment(m: &EnrichedMatch, style: TextStyle) -> String {
    let record = &m.record;
    let home_rating = m.ratings.home_rating();
    let away_rating = m.ratings.away_rating();
    let (home_mark, away_mark) = indicators(home_rating, away_rating);
    let tier = RecommendationTier::from_confidence(record.confidence);
    let e = |text: &str| style.escape(text);

    format!(
        "\n📅 {schedule}\n\
        \n\
        ⚔️ {matchup}\n\
        {home} {home_mark} vs {away} {away_mark}\n\
        \n\
        📊 {analysis}\n\
        ▫️ ความมั่นใจ: {confidence}/10\n\
        ▫️ ทีมแนะนำ: {recommended}\n\
        \n\
        📈 {odds_title}\n\
        ▫️ ราคาปัจจุบัน: {odds}\n\
        ▫️ Opening Odds: {opening}\n\
        ▫️ Available Odds: {available}\n\
        \n\
        📋 {stats}\n\
        ▫️ เรตติ้งเจ้าบ้าน: {home_rating}\n\
        ▫️ เรตติ้งทีมเยือน: {away_rating}\n\
        \n\
        💡 {advice}\n\
        {tier}\n\
        \n\
        {DIVIDER}\n",
        schedule = e(&record.schedule.display),
        matchup = style.bold("การแข่งขัน"),
        home = e(&record.home.name),
        away = e(&record.away.name),
        analysis = style.bold("การวิเคราะห์"),
        confidence = record.confidence,
        recommended = e(record.recommended.as_deref().unwrap_or_default()),
        odds_title = style.bold("ข้อมูลอัตราต่อรอง"),
        odds = e(&record.odds_text),
        opening = e(&record.columns.opening),
        available = e(&record.columns.available),
        stats = style.bold("สถิติทีม"),
        home_rating = e(&home_rating.to_string()),
        away_rating = e(&away_rating.to_string()),
        advice = style.bold("คำแนะนำ"),
        tier = e(tier.label()),
    )
}

/// A ranked set of matches ready to render.
#[derive(Debug, Clone)]
pub struct Digest {
    pub min_confidence: u32,
    pub matches: Vec<EnrichedMatch>,
}

impl Digest {
    #[must_use]
    pub fn new(min_confidence: u32, matches: Vec<EnrichedMatch>) -> Self {
        Self {
            min_confidence,
            matches,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    #[must_use]
    pub fn header(&self, style: TextStyle) -> String {
        style.escape(&format!(
            "🏆 ทีเด็ดบอลวันนี้ (ความมั่นใจ {}+)\nพบทั้งหมด {} คู่\n{HEADER_RULE}\n",
            self.min_confidence,
            self.matches.len()
        ))
    }

    /// Render as messages of at most `max_chars` characters each.
    ///
    /// An empty digest renders as the single no-matches message, never as a
    /// header with no fragments.
    #[must_use]
    pub fn messages(&self, style: TextStyle, max_chars: usize) -> Vec<String> {
        if self.is_empty() {
            return vec![style.escape(NO_MATCHES_MESSAGE)];
        }
        let fragments: Vec<String> = self
            .matches
            .iter()
            .map(|m| format_fragment(m, style))
            .collect();
        split_messages(&self.header(style), &fragments, max_chars)
    }

    /// Render as one text, regardless of length.
    #[must_use]
    pub fn render(&self, style: TextStyle) -> String {
        self.messages(style, usize::MAX).concat()
    }
}
