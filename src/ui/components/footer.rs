//! Footer component renderer.
//!
//! This module renders the "view all" call to action below the carousel.

use crate::ui::helpers::center;
use crate::ui::viewmodel::FooterInfo;

/// Appends the centered call-to-action line to `out`.
pub fn render_footer(out: &mut Vec<String>, footer: &FooterInfo, cols: usize) {
    out.push(center(&format!("[ {} → {} ]", footer.cta_label, footer.href), cols));
}
