//! Slide strip, arrows and dot indicators.
//!
//! The text renderer cannot scroll, so the strip is drawn as a window of three
//! slides centered on the active one: previous, active (expanded card) and
//! next. Clones are shown like any other slide since they are meant to be
//! indistinguishable from the item they mirror.

use crate::ui::helpers::{center, truncate};
use crate::ui::viewmodel::{Dot, SlideCard};

/// Appends the active card and its neighbours to `out`.
///
/// # Layout
///
/// ```text
/// ‹ Previous title                                   Next title ›
/// ┌ Active title ──────────────────────────────────────────────┐
/// │ 8 days · ★ 4.9 (127) · $3,450                              │
/// │ Summit night · Crater rim                                  │
/// │ /tours/kili-lemosho                       Hover for details │
/// └────────────────────────────────────────────────────────────┘
/// ```
pub fn render_slides(out: &mut Vec<String>, slides: &[SlideCard], active: usize, show_arrows: bool, cols: usize) {
    let Some(current) = slides.iter().find(|s| s.render_index == active).or_else(|| slides.first()) else {
        return;
    };

    if show_arrows {
        let prev = current
            .render_index
            .checked_sub(1)
            .and_then(|i| slides.get(i))
            .map_or("", |s| s.title.as_str());
        let next = slides.get(current.render_index + 1).map_or("", |s| s.title.as_str());
        let half = cols / 2;
        let left = truncate(&format!("‹ {prev}"), half);
        let right = truncate(&format!("{next} ›"), cols.saturating_sub(half));
        let gap = cols.saturating_sub(left.chars().count() + right.chars().count());
        out.push(format!("{left}{}{right}", " ".repeat(gap)));
    }

    let inner = cols.saturating_sub(4);
    let title = truncate(&current.title, inner.saturating_sub(1));
    let top_fill = cols.saturating_sub(title.chars().count() + 4);
    out.push(format!("┌ {title} {}┐", "─".repeat(top_fill)));

    let facts = format!(
        "{} · ★ {} ({}) · {}",
        current.duration, current.rating, current.reviews, current.price
    );
    out.push(boxed(&facts, inner));

    if !current.highlights.is_empty() {
        out.push(boxed(&current.highlights.join(" · "), inner));
    }

    let href = truncate(&current.href, inner);
    let caption_room = inner.saturating_sub(href.chars().count() + 1);
    let caption = truncate(&current.caption, caption_room);
    let spacer = inner.saturating_sub(href.chars().count() + caption.chars().count());
    out.push(format!("│ {href}{}{caption} │", " ".repeat(spacer)));

    out.push(format!("└{}┘", "─".repeat(cols.saturating_sub(2))));
}

/// Appends the dot row to `out`; nothing when there are no dots.
///
/// The active dot is drawn filled.
pub fn render_dots(out: &mut Vec<String>, dots: &[Dot], cols: usize) {
    if dots.is_empty() {
        return;
    }
    let row = dots
        .iter()
        .map(|d| if d.is_active { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ");
    out.push(center(&row, cols));
}

fn boxed(text: &str, inner: usize) -> String {
    let text = truncate(text, inner);
    let pad = inner.saturating_sub(text.chars().count());
    format!("│ {text}{} │", " ".repeat(pad))
}
