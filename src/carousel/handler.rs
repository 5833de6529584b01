//! Event handling for the carousel.
//!
//! This module implements [`handle_event`], the single entry point through
//! which hosts feed the carousel. It dispatches each [`Event`] to the matching
//! [`CarouselState`] transition and reports whether the visible output changed.
//!
//! # Architecture
//!
//! 1. The host delivers an event (viewport, clock, pointer, focus, content)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `CarouselState` methods
//! 4. Actions are collected and returned for the host to execute
//!
//! # Event Types
//!
//! - **Lifecycle**: `Mounted`, `Unmounted`, `LayoutMeasured`
//! - **Viewport**: `Scrolled`, `AnimationFrame`, `GuardReset`
//! - **Navigation**: `Next`, `Prev`, `GoTo`
//! - **Autoplay**: `AutoplayTick`, `PointerEnter`, `PointerLeave`, `FocusIn`,
//!   `FocusOut`, `IntervalChanged`
//! - **Content**: `ItemsReplaced`, `Content`, `Retry`
//!
//! # Example
//!
//! ```rust
//! use tour_carousel::carousel::{handle_event, CarouselOptions, CarouselState, Event};
//! use tour_carousel::Tour;
//!
//! let mut state = CarouselState::new(CarouselOptions::default());
//! let tours = vec![Tour::new(1, "a", "A"), Tour::new(2, "b", "B")];
//! let (render, _actions) = handle_event(&mut state, &Event::ItemsReplaced(tours))?;
//! assert!(render);
//! # Ok::<(), tour_carousel::CarouselError>(())
//! ```

use super::actions::{FrameId, GuardId, TimerId};
use super::modes::{AutoplayMode, ContentStatus};
use super::{Action, CarouselState};
use crate::domain::{Result, Tour};
use crate::loader::LoadResponse;
use std::time::Duration;

/// Events delivered to the carousel by its host.
///
/// Ids carried by `AnimationFrame`, `AutoplayTick` and `GuardReset` are the
/// ones the host received in the scheduling [`Action`].
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The carousel was attached to a viewport.
    Mounted,
    /// The carousel was detached.
    Unmounted,

    /// Slide start offsets were measured, indexed by render index.
    ///
    /// Sent after mount, after every rebuild, and on resize.
    LayoutMeasured {
        offsets: Vec<Option<f64>>,
    },

    /// The viewport scroll position changed.
    Scrolled {
        offset: f64,
    },

    /// A frame requested through [`Action::RequestFrame`] fired.
    AnimationFrame(FrameId),
    /// A timer started through [`Action::StartAutoplay`] fired.
    AutoplayTick(TimerId),
    /// A delay scheduled through [`Action::ScheduleGuardReset`] elapsed.
    GuardReset(GuardId),

    /// Next-arrow activation.
    Next,
    /// Previous-arrow activation.
    Prev,
    /// Dot activation, by logical index.
    GoTo(usize),

    PointerEnter,
    PointerLeave,
    /// Focus moved into the carousel or one of its descendants.
    FocusIn,
    /// Focus left the carousel.
    FocusOut,

    /// The autoplay period was reconfigured.
    IntervalChanged(Duration),

    /// The item list was replaced directly by the embedding page.
    ItemsReplaced(Vec<Tour>),
    /// A response from the content loader.
    Content(LoadResponse),
    /// The retry control of the error state was activated.
    Retry,
}

/// The parts of the state a render depends on.
#[derive(PartialEq)]
struct Visible {
    logical_index: usize,
    render_index: usize,
    item_count: usize,
    autoplay: AutoplayMode,
    content: ContentStatus,
}

impl Visible {
    fn capture(state: &CarouselState) -> Self {
        Self {
            logical_index: state.logical_index,
            render_index: state.render_index,
            item_count: state.item_count(),
            autoplay: state.autoplay,
            content: state.content.clone(),
        }
    }
}

/// Processes an event, mutates the carousel state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. `should_render` is true when the active item or
/// the slide it is shown on, the item list, autoplay mode, or content status changed. Actions must be
/// executed in order.
///
/// # Errors
///
/// The reducer itself has no failure modes; the `Result` keeps the signature
/// uniform with the rest of the crate so hosts can use `?` throughout.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut CarouselState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();
    let before = Visible::capture(state);

    let actions = match event {
        Event::Mounted => state.mount(),
        Event::Unmounted => state.unmount(),
        Event::LayoutMeasured { offsets } => state.apply_layout(offsets),
        Event::Scrolled { offset } => state.on_scroll(*offset),
        Event::AnimationFrame(frame) => state.on_frame(*frame),
        Event::AutoplayTick(timer) => state.on_autoplay_tick(*timer),
        Event::GuardReset(guard) => {
            state.on_guard_reset(*guard);
            vec![]
        }
        Event::Next => state.next(),
        Event::Prev => state.prev(),
        Event::GoTo(logical) => state.go_to(*logical),
        Event::PointerEnter | Event::FocusIn => state.pause(),
        Event::PointerLeave | Event::FocusOut => state.resume(),
        Event::IntervalChanged(interval) => state.set_interval(*interval),
        Event::ItemsReplaced(items) => state.replace_items(items.clone()),
        Event::Content(response) => state.on_content(response),
        Event::Retry => state.retry(),
    };

    let should_render = Visible::capture(state) != before;
    if !actions.is_empty() {
        tracing::trace!(count = actions.len(), should_render, "actions emitted");
    }
    Ok((should_render, actions))
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Mounted => "mounted",
        Event::Unmounted => "unmounted",
        Event::LayoutMeasured { .. } => "layout_measured",
        Event::Scrolled { .. } => "scrolled",
        Event::AnimationFrame(_) => "animation_frame",
        Event::AutoplayTick(_) => "autoplay_tick",
        Event::GuardReset(_) => "guard_reset",
        Event::Next => "next",
        Event::Prev => "prev",
        Event::GoTo(_) => "go_to",
        Event::PointerEnter => "pointer_enter",
        Event::PointerLeave => "pointer_leave",
        Event::FocusIn => "focus_in",
        Event::FocusOut => "focus_out",
        Event::IntervalChanged(_) => "interval_changed",
        Event::ItemsReplaced(_) => "items_replaced",
        Event::Content(_) => "content",
        Event::Retry => "retry",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::CarouselOptions;

    fn tours(n: usize) -> Vec<Tour> {
        (0..n)
            .map(|i| Tour::new(i as i64, format!("t{i}"), format!("T{i}")))
            .collect()
    }

    #[test]
    fn pointer_hover_pauses_and_leave_resumes() {
        let mut state = CarouselState::new(CarouselOptions::default());
        handle_event(&mut state, &Event::ItemsReplaced(tours(3))).unwrap();
        handle_event(&mut state, &Event::Mounted).unwrap();
        assert!(state.autoplay_timer.is_some());

        let (render, actions) = handle_event(&mut state, &Event::PointerEnter).unwrap();
        assert!(render);
        assert!(matches!(actions[..], [Action::StopAutoplay(_)]));
        assert!(state.autoplay_timer.is_none());

        let (_, actions) = handle_event(&mut state, &Event::PointerLeave).unwrap();
        assert!(matches!(actions[..], [Action::StartAutoplay { .. }]));
    }

    #[test]
    fn scroll_event_alone_does_not_render() {
        let mut state = CarouselState::new(CarouselOptions::default());
        handle_event(&mut state, &Event::ItemsReplaced(tours(3))).unwrap();
        handle_event(&mut state, &Event::Mounted).unwrap();
        let (render, actions) = handle_event(&mut state, &Event::Scrolled { offset: 12.0 }).unwrap();
        assert!(!render);
        assert!(matches!(actions[..], [Action::RequestFrame(_)]));
    }

    #[test]
    fn teleport_off_clone_renders_even_though_logical_index_holds() {
        let mut state = CarouselState::new(CarouselOptions::default());
        handle_event(&mut state, &Event::ItemsReplaced(tours(3))).unwrap();
        handle_event(&mut state, &Event::Mounted).unwrap();
        let offsets = (0..5).map(|i| Some(f64::from(i) * 100.0)).collect();
        handle_event(&mut state, &Event::LayoutMeasured { offsets }).unwrap();
        for _ in 0..3 {
            handle_event(&mut state, &Event::Next).unwrap();
        }
        assert_eq!((state.render_index, state.logical_index), (4, 0));

        let (_, actions) = handle_event(&mut state, &Event::Scrolled { offset: 400.0 }).unwrap();
        let [Action::RequestFrame(frame)] = actions[..] else {
            panic!("expected a frame request, got {actions:?}");
        };
        let (render, actions) = handle_event(&mut state, &Event::AnimationFrame(frame)).unwrap();

        assert!(render);
        assert_eq!((state.render_index, state.logical_index), (1, 0));
        assert!(matches!(actions[0], Action::ScrollTo { render_index: 1, .. }));
    }

    #[test]
    fn focus_inside_pauses_like_hover() {
        let mut state = CarouselState::new(CarouselOptions::default());
        handle_event(&mut state, &Event::ItemsReplaced(tours(2))).unwrap();
        handle_event(&mut state, &Event::Mounted).unwrap();
        handle_event(&mut state, &Event::FocusIn).unwrap();
        assert_eq!(state.autoplay, AutoplayMode::Paused);
        handle_event(&mut state, &Event::FocusOut).unwrap();
        assert_eq!(state.autoplay, AutoplayMode::Running);
    }
}
