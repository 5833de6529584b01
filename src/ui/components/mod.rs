//! Composable UI component renderers.
//!
//! Each component appends finished lines to a shared buffer and is
//! responsible for one part of the section.
//!
//! # Components
//!
//! - `header`: Eyebrow, title and subtitle
//! - `slides`: Arrow row, active card and dot indicators
//! - `states`: Loading skeleton, error panel with retry, empty message
//! - `footer`: "View all tours" call to action
//!
//! # Layout Modes
//!
//! - [`render_carousel_mode`]: Header + Slides + Dots + Footer
//! - [`render_state_mode`]: Header + State panel + Footer

mod footer;
mod header;
mod slides;
mod states;

use crate::ui::helpers::rule;
use crate::ui::viewmodel::CarouselViewModel;

use footer::render_footer;
use header::render_header;
use slides::{render_dots, render_slides};
use states::{render_empty_state, render_error, render_loading};

/// Renders the carousel layout.
///
/// ```text
/// [Header - 3 lines]
/// [Border]
/// [Arrow row, only with 2+ items]
/// [Active card]
/// [Dots]
/// [Border]
/// [Footer]
/// ```
pub fn render_carousel_mode(vm: &CarouselViewModel, cols: usize) -> Vec<String> {
    let mut out = Vec::new();
    render_header(&mut out, &vm.header, cols);
    out.push(rule(cols));
    render_slides(&mut out, &vm.slides, vm.active_render_index, vm.show_arrows, cols);
    render_dots(&mut out, &vm.dots, cols);
    out.push(rule(cols));
    render_footer(&mut out, &vm.footer, cols);
    out
}

/// Renders the layout used while there is nothing to slide through.
///
/// ```text
/// [Header - 3 lines]
/// [Border]
/// [Loading | Error | Empty panel]
/// [Border]
/// [Footer]
/// ```
pub fn render_state_mode(vm: &CarouselViewModel, cols: usize) -> Vec<String> {
    let mut out = Vec::new();
    render_header(&mut out, &vm.header, cols);
    out.push(rule(cols));
    if let Some(loading) = &vm.loading {
        render_loading(&mut out, loading, cols);
    } else if let Some(error) = &vm.error_state {
        render_error(&mut out, error, cols);
    } else if let Some(empty) = &vm.empty_state {
        render_empty_state(&mut out, empty, cols);
    }
    out.push(rule(cols));
    render_footer(&mut out, &vm.footer, cols);
    out
}
