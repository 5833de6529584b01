//! Loading, error and empty state panels.
//!
//! Each panel replaces the slide strip entirely; the header and footer stay.

use crate::ui::helpers::{center, truncate};
use crate::ui::viewmodel::{EmptyState, ErrorState, LoadingState};

/// Appends skeleton cards, one shaded bar per placeholder.
pub fn render_loading(out: &mut Vec<String>, loading: &LoadingState, cols: usize) {
    let bar_width = cols.saturating_sub(8).max(1);
    for _ in 0..loading.placeholders {
        out.push(center(&"░".repeat(bar_width), cols));
    }
}

/// Appends the error panel with its retry control.
pub fn render_error(out: &mut Vec<String>, error: &ErrorState, cols: usize) {
    out.push(center(&error.title, cols));
    out.push(center(&truncate(&error.message, cols), cols));
    out.push(center(&format!("[ ↻ {} ]", error.retry_label), cols));
}

/// Appends the centered two-line empty message.
pub fn render_empty_state(out: &mut Vec<String>, empty: &EmptyState, cols: usize) {
    out.push(center(&empty.message, cols));
    out.push(center(&empty.subtitle, cols));
}
