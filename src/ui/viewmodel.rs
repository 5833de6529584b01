//! View model types representing renderable carousel state.
//!
//! View models are immutable, display-ready projections computed from
//! [`CarouselState`] by [`CarouselState::compute_viewmodel`]. They contain no
//! business logic: every label is already formatted and every visibility rule
//! (arrows, dots, state panels) is already applied.
//!
//! # Visibility rules
//!
//! - Arrows only appear with two or more items
//! - Dots are one per real item, never per clone
//! - Exactly one of slides, loading, error or empty is shown

use crate::carousel::{CarouselState, ContentStatus};
use crate::domain::Tour;

/// Small label shown above the section title.
pub const EYEBROW: &str = "SIGNATURE EXPERIENCES";
pub const SECTION_TITLE: &str = "Featured tours crafted for Tanzania Wonderland";
pub const SECTION_SUBTITLE: &str =
    "Images first, hover to reveal full details. Premium planning, local expertise, and reliable logistics.";
pub const EMPTY_MESSAGE: &str = "No featured tours available right now";
pub const EMPTY_SUBTITLE: &str =
    "Please check back soon, or browse all tours to explore available experiences.";
pub const ERROR_TITLE: &str = "Failed to load featured tours";
pub const ALL_TOURS_HREF: &str = "/tours";

/// Number of skeleton cards shown while loading.
pub const SKELETON_CARDS: usize = 3;

/// Complete carousel view model.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselViewModel {
    pub header: HeaderInfo,

    /// Every slide of the extended sequence, clones included, in render order.
    pub slides: Vec<SlideCard>,

    /// Render index of the active slide.
    pub active_render_index: usize,

    /// One dot per real item; empty while no slides are shown.
    pub dots: Vec<Dot>,

    pub show_arrows: bool,

    pub loading: Option<LoadingState>,
    pub error_state: Option<ErrorState>,
    pub empty_state: Option<EmptyState>,

    pub footer: FooterInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
}

/// Display data for one slide.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideCard {
    pub render_index: usize,
    pub is_clone: bool,
    pub is_active: bool,
    pub title: String,
    /// Link to the details page.
    pub href: String,
    pub image: String,
    pub duration: String,
    /// Rating with one decimal, or `"—"`.
    pub rating: String,
    pub reviews: u32,
    pub price: String,
    pub highlights: Vec<String>,
    /// `"Hover for details"` in a looping carousel, `"Featured tour"` for a lone card.
    pub caption: String,
}

/// One dot indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dot {
    /// Logical index the dot navigates to.
    pub index: usize,
    /// Accessible label, e.g. `"Go to slide 2"`.
    pub label: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingState {
    pub placeholders: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorState {
    pub title: String,
    pub message: String,
    pub retry_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub cta_label: String,
    pub href: String,
}

impl CarouselViewModel {
    /// Projects the carousel state into display data.
    #[must_use]
    pub fn from_state(state: &CarouselState) -> Self {
        let n = state.item_count();
        let looping = n > 1;

        let mut vm = Self {
            header: HeaderInfo {
                eyebrow: EYEBROW.to_string(),
                title: SECTION_TITLE.to_string(),
                subtitle: SECTION_SUBTITLE.to_string(),
            },
            slides: Vec::new(),
            active_render_index: state.render_index,
            dots: Vec::new(),
            show_arrows: false,
            loading: None,
            error_state: None,
            empty_state: None,
            footer: FooterInfo {
                cta_label: "View All Tours".to_string(),
                href: ALL_TOURS_HREF.to_string(),
            },
        };

        match &state.content {
            ContentStatus::Loading => {
                vm.loading = Some(LoadingState {
                    placeholders: SKELETON_CARDS,
                });
                return vm;
            }
            ContentStatus::Failed { message } => {
                vm.error_state = Some(ErrorState {
                    title: ERROR_TITLE.to_string(),
                    message: message.clone(),
                    retry_label: "Retry".to_string(),
                });
                return vm;
            }
            ContentStatus::Ready if n == 0 => {
                vm.empty_state = Some(EmptyState {
                    message: EMPTY_MESSAGE.to_string(),
                    subtitle: EMPTY_SUBTITLE.to_string(),
                });
                return vm;
            }
            ContentStatus::Ready => {}
        }

        let caption = if looping { "Hover for details" } else { "Featured tour" };
        vm.slides = state
            .sequence
            .slides
            .iter()
            .filter_map(|slide| {
                let tour = state.items.get(slide.source_index)?;
                Some(card(tour, slide.render_index, slide.is_clone, slide.render_index == state.render_index, caption))
            })
            .collect();

        vm.show_arrows = looping;
        vm.dots = (0..n)
            .map(|index| Dot {
                index,
                label: format!("Go to slide {}", index + 1),
                is_active: index == state.logical_index,
            })
            .collect();

        vm
    }

    /// The active slide, if any slides are shown.
    #[must_use]
    pub fn active_slide(&self) -> Option<&SlideCard> {
        self.slides.iter().find(|s| s.is_active)
    }
}

fn card(tour: &Tour, render_index: usize, is_clone: bool, is_active: bool, caption: &str) -> SlideCard {
    SlideCard {
        render_index,
        is_clone,
        is_active,
        title: tour.title.clone(),
        href: tour.href(),
        image: tour.image.clone(),
        duration: tour.duration.clone(),
        rating: tour.rating_label(),
        reviews: tour.reviews,
        price: tour.price.clone(),
        highlights: tour.highlights.clone(),
        caption: caption.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::CarouselOptions;

    fn state_with(n: usize) -> CarouselState {
        let mut state = CarouselState::new(CarouselOptions::default());
        state.replace_items(
            (0..n)
                .map(|i| Tour::new(i as i64, format!("s{i}"), format!("Tour {i}")))
                .collect(),
        );
        state
    }

    #[test]
    fn loading_state_before_content() {
        let state = CarouselState::new(CarouselOptions::default());
        let vm = state.compute_viewmodel();
        assert_eq!(vm.loading, Some(LoadingState { placeholders: 3 }));
        assert!(vm.slides.is_empty());
    }

    #[test]
    fn zero_items_show_empty_message_only() {
        let vm = state_with(0).compute_viewmodel();
        assert_eq!(vm.empty_state.as_ref().map(|e| e.message.as_str()), Some(EMPTY_MESSAGE));
        assert!(vm.dots.is_empty());
        assert!(!vm.show_arrows);
    }

    #[test]
    fn single_item_has_one_dot_and_no_arrows() {
        let vm = state_with(1).compute_viewmodel();
        assert_eq!(vm.slides.len(), 1);
        assert!(!vm.show_arrows);
        assert_eq!(vm.dots.len(), 1);
        assert!(vm.dots[0].is_active);
        assert_eq!(vm.slides[0].caption, "Featured tour");
    }

    #[test]
    fn dots_count_real_items_and_track_logical_index() {
        let mut state = state_with(4);
        state.go_to(2);
        let vm = state.compute_viewmodel();
        assert_eq!(vm.slides.len(), 6);
        assert_eq!(vm.dots.len(), 4);
        let active: Vec<usize> = vm.dots.iter().filter(|d| d.is_active).map(|d| d.index).collect();
        assert_eq!(active, vec![2]);
        assert_eq!(vm.active_slide().map(|s| s.title.as_str()), Some("Tour 2"));
    }

    #[test]
    fn failure_shows_error_with_message() {
        let mut state = CarouselState::new(CarouselOptions::default());
        state.content = ContentStatus::Failed {
            message: "(500) Internal Server Error".to_string(),
        };
        let vm = state.compute_viewmodel();
        let error = vm.error_state.expect("error state");
        assert_eq!(error.message, "(500) Internal Server Error");
        assert_eq!(error.retry_label, "Retry");
    }
}
