//! Lenient numeric parsing for scraped cell text.
//!
//! Cells often carry trailing decoration (`"1.85 ⬆"`, `"9/10"`). Only the
//! leading numeric prefix counts; anything without one is `None`.

/// Parse the leading decimal number of `text`.
#[must_use]
pub fn parse_leading_f64(text: &str) -> Option<f64> {
    let text = text.trim();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, c) in text.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return None;
    }
    text[..end].trim_end_matches('.').parse().ok()
}

/// Parse the leading unsigned integer of `text`.
#[must_use]
pub fn parse_leading_u32(text: &str) -> Option<u32> {
    let text = text.trim();
    let end = text
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, c)| i + c.len_utf8())?;
    text[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_float() {
        assert_eq!(parse_leading_f64("1.85"), Some(1.85));
        assert_eq!(parse_leading_f64(" 2.10 ⬆️"), Some(2.10));
        assert_eq!(parse_leading_f64("7."), Some(7.0));
        assert_eq!(parse_leading_f64("-0.5"), Some(-0.5));
        assert_eq!(parse_leading_f64("12"), Some(12.0));
    }

    #[test]
    fn no_leading_float() {
        assert_eq!(parse_leading_f64(""), None);
        assert_eq!(parse_leading_f64("Odds"), None);
        assert_eq!(parse_leading_f64("."), None);
        assert_eq!(parse_leading_f64("-"), None);
    }

    #[test]
    fn leading_integer() {
        assert_eq!(parse_leading_u32("9"), Some(9));
        assert_eq!(parse_leading_u32("10/10"), Some(10));
        assert_eq!(parse_leading_u32("8.7"), Some(8));
        assert_eq!(parse_leading_u32("abc"), None);
        assert_eq!(parse_leading_u32("-3"), None);
        assert_eq!(parse_leading_u32(""), None);
    }
}
