//! Case-insensitive matching helpers shared by keyword filtering and search

use std::ops::Range;

/// Characters of context kept on each side of a search match
pub const CONTEXT_CHARS: usize = 20;

/// Find the first case-insensitive occurrence of `needle` in `haystack`.
///
/// Returns the byte range of the match in `haystack`. Comparison is done on lowercased
/// characters, so the range always falls on char boundaries even when lowercasing changes
/// the byte length of a character.
pub fn find_case_insensitive(haystack: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() {
        return Some(0..0);
    }

    let needle: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();

    'start: for (start, _) in haystack.char_indices() {
        let mut pending = needle.iter().peekable();
        for (offset, ch) in haystack[start..].char_indices() {
            for lower in ch.to_lowercase() {
                match pending.next() {
                    Some(&want) if want == lower => {}
                    _ => continue 'start,
                }
            }
            if pending.peek().is_none() {
                return Some(start..start + offset + ch.len_utf8());
            }
        }
        // Ran out of haystack; later starts are shorter still
        return None;
    }

    None
}

pub fn contains_case_insensitive(haystack: &str, needle: &str) -> bool {
    find_case_insensitive(haystack, needle).is_some()
}

/// Slice of `text` around `matched`, extended by up to [`CONTEXT_CHARS`] characters on
/// each side and wrapped in ellipses
pub fn context_window(text: &str, matched: Range<usize>) -> String {
    let start = text[..matched.start]
        .char_indices()
        .rev()
        .take(CONTEXT_CHARS)
        .last()
        .map_or(matched.start, |(i, _)| i);
    let end = text[matched.end..]
        .char_indices()
        .nth(CONTEXT_CHARS)
        .map_or(text.len(), |(i, _)| matched.end + i);

    format!("...{}...", &text[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_ascii_case_insensitive() {
        assert_eq!(find_case_insensitive("Hello World", "world"), Some(6..11));
        assert_eq!(find_case_insensitive("Hello World", "WORLD"), Some(6..11));
        assert_eq!(find_case_insensitive("Hello World", "planet"), None);
    }

    #[test]
    fn test_find_empty_needle() {
        assert_eq!(find_case_insensitive("abc", ""), Some(0..0));
    }

    #[test]
    fn test_find_needle_longer_than_haystack() {
        assert_eq!(find_case_insensitive("ab", "abc"), None);
    }

    #[test]
    fn test_find_unicode() {
        let text = "Grüße aus MÜNCHEN";
        let range = find_case_insensitive(text, "münchen").unwrap();
        assert_eq!(&text[range], "MÜNCHEN");
    }

    #[test]
    fn test_find_retries_after_partial_match() {
        assert_eq!(find_case_insensitive("aaab", "aab"), Some(1..4));
    }

    #[test]
    fn test_contains_case_insensitive() {
        assert!(contains_case_insensitive("Refactor the PARSER", "parser"));
        assert!(!contains_case_insensitive("Refactor the parser", "lexer"));
    }

    #[test]
    fn test_context_window_clips_at_bounds() {
        let text = "short match here";
        let range = find_case_insensitive(text, "match").unwrap();
        assert_eq!(context_window(text, range), "...short match here...");
    }

    #[test]
    fn test_context_window_twenty_chars_each_side() {
        let text = format!("{}NEEDLE{}", "a".repeat(30), "b".repeat(30));
        let range = find_case_insensitive(&text, "needle").unwrap();
        let expected = format!("...{}NEEDLE{}...", "a".repeat(20), "b".repeat(20));
        assert_eq!(context_window(&text, range), expected);
    }

    #[test]
    fn test_context_window_multibyte() {
        let text = format!("{}x{}", "é".repeat(25), "ü".repeat(25));
        let range = find_case_insensitive(&text, "X").unwrap();
        let expected = format!("...{}x{}...", "é".repeat(20), "ü".repeat(20));
        assert_eq!(context_window(&text, range), expected);
    }
}
