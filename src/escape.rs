//! SQL literal escaping for INSERT output

use std::fmt::Display;

/// Values longer than this many characters are cut before quoting
pub const MAX_LITERAL_CHARS: usize = 255;

/// Render a value as a SQL literal.
///
/// `None` becomes the bare `NULL` keyword. Anything else is truncated to
/// [`MAX_LITERAL_CHARS`] characters, has its single quotes doubled, and is
/// wrapped in single quotes.
pub fn escape(value: Option<&str>) -> String {
    escape_with_limit(value, MAX_LITERAL_CHARS)
}

/// Same as [`escape`] with a caller-chosen truncation limit
pub fn escape_with_limit(value: Option<&str>, max_chars: usize) -> String {
    let Some(value) = value else {
        return String::from("NULL");
    };

    let mut out = String::with_capacity(value.len().min(max_chars.saturating_mul(4)) + 2);
    out.push('\'');
    for c in value.chars().take(max_chars) {
        if c == '\'' {
            out.push('\'');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

/// Escape any displayable value by its string form
pub fn escape_display<T: Display + ?Sized>(value: Option<&T>) -> String {
    match value {
        Some(v) => escape(Some(&v.to_string())),
        None => escape(None),
    }
}
