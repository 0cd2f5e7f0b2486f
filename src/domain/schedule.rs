//! Match schedule display in Thai, on Bangkok time.

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, Offset, TimeDelta, TimeZone, Timelike, Utc,
};
use serde::Serialize;

const BANGKOK_OFFSET_SECS: i32 = 7 * 3600;

const THAI_DAYS: [&str; 7] = [
    "อาทิตย์",
    "จันทร์",
    "อังคาร",
    "พุธ",
    "พฤหัสบดี",
    "ศุกร์",
    "เสาร์",
];

const THAI_MONTHS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

/// Display-ready schedule fields for a match.
///
/// Every field is empty when the raw token could not be read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    /// Full sentence, e.g. `วันเสาร์ที่ 15 มีนาคม 2025 เวลา 02:00 น.`
    pub display: String,
    /// `DD/MM/YYYY`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub day_of_week: String,
}

impl Schedule {
    /// Build from a raw `DD/MM HH:MM` token read as UTC in `year`.
    ///
    /// The kick-off is shifted to Bangkok time and then one hour back, the
    /// listing's own clock being an hour ahead of UTC.
    #[must_use]
    pub fn from_token(token: &str, year: i32) -> Self {
        let Some(local) = kickoff(token, year) else {
            return Self::default();
        };

        let day_of_week = THAI_DAYS[local.weekday().num_days_from_sunday() as usize];
        let month = THAI_MONTHS[local.month0() as usize];
        let time = format!("{:02}:{:02}", local.hour(), local.minute());

        Self {
            display: format!(
                "วัน{day_of_week}ที่ {:02} {month} {} เวลา {time} น.",
                local.day(),
                local.year()
            ),
            date: format!("{:02}/{:02}/{}", local.day(), local.month(), local.year()),
            time,
            day_of_week: day_of_week.to_string(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }
}

/// Current calendar year in Bangkok.
#[must_use]
pub fn bangkok_year_now() -> i32 {
    Utc::now().with_timezone(&bangkok()).year()
}

fn bangkok() -> FixedOffset {
    FixedOffset::east_opt(BANGKOK_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

fn kickoff(token: &str, year: i32) -> Option<DateTime<FixedOffset>> {
    let words: Vec<&str> = token.split_whitespace().collect();
    let (day, month, hour, minute) = words.windows(2).find_map(|pair| {
        let (day, month) = two_digit_pair(pair[0], '/')?;
        let (hour, minute) = two_digit_pair(pair[1], ':')?;
        Some((day, month, hour, minute))
    })?;

    let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)?;
    let local = Utc.from_utc_datetime(&naive).with_timezone(&bangkok());
    Some(local - TimeDelta::hours(1))
}

/// Read `..NN<sep>NN..` as two numbers, using the two digits either side of `sep`.
fn two_digit_pair(word: &str, sep: char) -> Option<(u32, u32)> {
    let (left, right) = word.split_once(sep)?;
    let left = left.get(left.len().checked_sub(2)?..)?;
    let right = right.get(..2)?;
    if !(left.bytes().all(|b| b.is_ascii_digit()) && right.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }
    Some((left.parse().ok()?, right.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_shifted_to_bangkok_minus_one_hour() {
        let schedule = Schedule::from_token("15/03 20:00", 2025);
        assert_eq!(schedule.time, "02:00");
        assert_eq!(schedule.date, "16/03/2025");
        assert_eq!(schedule.day_of_week, "อาทิตย์");
        assert_eq!(schedule.display, "วันอาทิตย์ที่ 16 มีนาคม 2025 เวลา 02:00 น.");
    }

    #[test]
    fn same_day_kickoff() {
        let schedule = Schedule::from_token("01/12 09:30", 2024);
        assert_eq!(schedule.time, "15:30");
        assert_eq!(schedule.date, "01/12/2024");
        assert_eq!(schedule.day_of_week, "อาทิตย์");
        assert!(schedule.display.contains("ธันวาคม"));
    }

    #[test]
    fn extra_words_around_the_token_are_ignored() {
        let schedule = Schedule::from_token("Sat 15/03 20:00 live", 2025);
        assert_eq!(schedule.time, "02:00");
    }

    #[test]
    fn unreadable_tokens_give_empty_schedule() {
        assert!(Schedule::from_token("", 2025).is_empty());
        assert!(Schedule::from_token("TBD", 2025).is_empty());
        assert!(Schedule::from_token("15/03", 2025).is_empty());
        assert!(Schedule::from_token("31/02 20:00", 2025).is_empty());
        assert!(Schedule::from_token("15/03 25:00", 2025).is_empty());
    }
}
