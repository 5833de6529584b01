//! Shared text layout utilities.
//!
//! All widths are measured in `char`s, which is good enough for the Latin
//! copy the carousel shows. Helpers never produce a line wider than asked.

/// Ellipsis appended to truncated text.
const ELLIPSIS: char = '…';

/// Shortens `text` to at most `max` chars, ending with `…` when cut.
///
/// # Examples
///
/// ```
/// use tour_carousel::ui::helpers::truncate;
///
/// assert_eq!(truncate("Serengeti", 20), "Serengeti");
/// assert_eq!(truncate("Serengeti Migration", 10), "Serengeti…");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push(ELLIPSIS);
    out
}

/// Centers `text` in a line of `width` chars, truncating if needed.
///
/// Left padding is the smaller half when the slack is odd.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let len = text.chars().count();
    let left = width.saturating_sub(len) / 2;
    let right = width.saturating_sub(len + left);
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

/// Horizontal rule spanning `width` chars.
#[must_use]
pub fn rule(width: usize) -> String {
    "─".repeat(width)
}
