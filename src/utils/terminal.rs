//! Terminal output sanitization
//!
//! Chat text comes straight from the input file and is echoed in listings and search
//! reports. Escape sequences embedded in it could recolor the screen, move the cursor or
//! clear the listing, so every user-controlled string passes through [`sanitize_line`]
//! before display. Exported Markdown is never sanitized.

/// Strip ANSI CSI sequences and control characters, and fold line breaks and tabs into
/// single spaces so the text fits on one listing row
///
/// # Examples
///
/// ```
/// use chat_scribe::utils::terminal::sanitize_line;
///
/// assert_eq!(sanitize_line("\x1b[31mred\x1b[0m\ntext"), "red text");
/// ```
pub fn sanitize_line(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            // ESC [ ... final letter
            if chars.peek() == Some(&'[') {
                chars.next();
                for next in chars.by_ref() {
                    if next.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
            continue;
        }

        if matches!(ch, '\n' | '\r' | '\t') {
            if !result.ends_with(' ') {
                result.push(' ');
            }
            continue;
        }

        if ch.is_control() {
            continue;
        }

        result.push(ch);
    }

    result
}
