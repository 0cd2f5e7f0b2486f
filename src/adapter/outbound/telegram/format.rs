//! MarkdownV2 helpers for Telegram messages.

/// Escape special characters for Telegram `MarkdownV2`.
pub fn escape_markdown(text: &str) -> String {
    let special_chars = [
        '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
        '\\',
    ];
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if special_chars.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}

/// Pack `header` and `fragments` into messages of at most `max_chars`
/// characters.
///
/// Fragments are never split unless one alone exceeds the limit; the header
/// travels with the first message. Empty input yields no messages.
pub fn split_messages(header: &str, fragments: &[String], max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut messages = Vec::new();
    let mut current = header.to_string();
    let mut current_len = current.chars().count();

    for fragment in fragments {
        let len = fragment.chars().count();
        if current_len + len <= max_chars {
            current.push_str(fragment);
            current_len += len;
            continue;
        }

        if !current.is_empty() {
            messages.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if len <= max_chars {
            current.push_str(fragment);
            current_len = len;
        } else {
            messages.extend(hard_split(fragment, max_chars));
        }
    }

    if !current.is_empty() {
        messages.push(current);
    }
    messages
}

/// Cut an oversized escaped fragment at character boundaries, never leaving
/// a dangling escape at the end of a piece.
fn hard_split(text: &str, max_chars: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_len = 0;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let width = if c == '\\' && chars.peek().is_some() { 2 } else { 1 };
        if piece_len + width > max_chars && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            piece_len = 0;
        }
        piece.push(c);
        if width == 2 {
            if let Some(escaped) = chars.next() {
                piece.push(escaped);
            }
        }
        piece_len += width;
    }

    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("hello"), "hello");
        assert_eq!(escape_markdown("hello_world"), "hello\\_world");
        assert_eq!(escape_markdown("*bold*"), "\\*bold\\*");
        assert_eq!(escape_markdown("1.85"), "1\\.85");
        assert_eq!(escape_markdown("Brighton & Hove (U21)"), "Brighton & Hove \\(U21\\)");
    }

    #[test]
    fn test_escape_thai_text_untouched() {
        assert_eq!(escape_markdown("วันอาทิตย์ที่ 16"), "วันอาทิตย์ที่ 16");
    }

    #[test]
    fn fragments_fitting_together_share_one_message() {
        let fragments = vec!["aaa".to_string(), "bbb".to_string()];
        assert_eq!(split_messages("H:", &fragments, 100), vec!["H:aaabbb"]);
    }

    #[test]
    fn split_happens_at_fragment_boundaries() {
        let fragments = vec!["aaaa".to_string(), "bbbb".to_string(), "cc".to_string()];
        let messages = split_messages("H:", &fragments, 7);
        assert_eq!(messages, vec!["H:aaaa", "bbbbcc"]);
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        let fragments = vec!["ทีเด็ด".to_string(), "ทีเด็ด".to_string()];
        let messages = split_messages("", &fragments, 12);
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn oversized_fragment_is_cut_without_dangling_escape() {
        let fragment = "ab\\.cd".to_string();
        let messages = split_messages("", &[fragment], 3);
        assert_eq!(messages, vec!["ab", "\\.c", "d"]);
        assert!(messages.iter().all(|m| !m.ends_with('\\') || m.ends_with("\\\\")));
    }

    #[test]
    fn header_alone_is_still_delivered() {
        assert_eq!(split_messages("only header", &[], 50), vec!["only header"]);
        assert!(split_messages("", &[], 50).is_empty());
    }
}
