//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `CarouselState` into `CarouselViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! # Example
//!
//! ```rust
//! use tour_carousel::carousel::{CarouselOptions, CarouselState};
//! use tour_carousel::ui::render;
//!
//! let state = CarouselState::new(CarouselOptions::default());
//! let text = render(&state, 60);
//! assert!(text.contains("SIGNATURE EXPERIENCES"));
//! ```

use crate::carousel::CarouselState;
use crate::ui::components;
use crate::ui::viewmodel::CarouselViewModel;

/// Narrowest width the layout is drawn at.
pub const MIN_COLS: usize = 24;

/// Renders the carousel section as plain text, `cols` chars wide.
///
/// Widths below [`MIN_COLS`] are raised to it.
#[must_use]
pub fn render(state: &CarouselState, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, cols)
}

/// Renders a precomputed view model.
///
/// Chooses the state panel layout when loading, failed or empty, and the
/// carousel layout otherwise.
#[must_use]
pub fn render_viewmodel(vm: &CarouselViewModel, cols: usize) -> String {
    let cols = cols.max(MIN_COLS);
    let lines = if vm.slides.is_empty() {
        components::render_state_mode(vm, cols)
    } else {
        components::render_carousel_mode(vm, cols)
    };
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::CarouselOptions;
    use crate::domain::Tour;

    #[test]
    fn empty_list_renders_message() {
        let mut state = CarouselState::new(CarouselOptions::default());
        state.replace_items(vec![]);
        let text = render(&state, 80);
        assert!(text.contains("No featured tours available right now"));
        assert!(!text.contains('●'));
    }

    #[test]
    fn carousel_renders_active_title_and_dots() {
        let mut state = CarouselState::new(CarouselOptions::default());
        state.replace_items(vec![
            Tour::new(1, "serengeti", "Serengeti Migration"),
            Tour::new(2, "zanzibar", "Zanzibar Spice Coast"),
        ]);
        let text = render(&state, 72);
        assert!(text.contains("┌ Serengeti Migration"));
        assert!(text.contains("/tours/serengeti"));
        assert!(text.contains("● ○"));
    }
}
