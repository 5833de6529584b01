//! Header component renderer.
//!
//! Renders the section heading: eyebrow label, title and subtitle, each
//! centered on its own line.

use crate::ui::helpers::center;
use crate::ui::viewmodel::HeaderInfo;

/// Appends the header lines to `out`.
///
/// # Layout
///
/// ```text
/// [padding] · EYEBROW · [padding]
/// [padding] Title       [padding]
/// [padding] subtitle    [padding]
/// ```
pub fn render_header(out: &mut Vec<String>, header: &HeaderInfo, cols: usize) {
    out.push(center(&format!("· {} ·", header.eyebrow), cols));
    out.push(center(&header.title, cols));
    out.push(center(&header.subtitle, cols));
}
