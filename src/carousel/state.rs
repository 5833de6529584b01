//! Carousel state and the transitions behind every event.
//!
//! This module defines [`CarouselState`], the single source of truth for one
//! carousel instance: the item list, the extended sequence built from it, the
//! active position in both index spaces, the autoplay and content status, and
//! the bookkeeping for callbacks the host has been asked to schedule.
//!
//! # Architecture
//!
//! Core data (items, measured layout, scroll offset) is kept apart from derived
//! data (sequence, translator, logical index). Derived data is rebuilt whenever
//! the item list is replaced, never patched in place.
//!
//! Every transition method returns the [`Action`]s the host has to execute.
//! Nothing here touches a clock or a viewport, which keeps the whole machine
//! deterministic under test.
//!
//! # Position invariant
//!
//! Whenever there is at least one item:
//!
//! ```text
//! logical_index == (render_index - clone_count + item_count) % item_count
//! ```
//!
//! and `logical_index < item_count`.
//!
//! # Example
//!
//! ```rust
//! use tour_carousel::carousel::{CarouselOptions, CarouselState};
//! use tour_carousel::Tour;
//!
//! let mut state = CarouselState::new(CarouselOptions::default());
//! state.replace_items(vec![
//!     Tour::new(1, "a", "A"),
//!     Tour::new(2, "b", "B"),
//!     Tour::new(3, "c", "C"),
//! ]);
//! assert_eq!(state.sequence.len(), 5);
//! assert_eq!(state.render_index, 1);
//! assert_eq!(state.logical_index, 0);
//! ```

use super::actions::{Action, FrameId, GuardId, TimerId};
use super::index::IndexTranslator;
use super::modes::{AutoplayMode, ContentStatus, ScrollBehavior};
use super::sequence::{build_sequence, ExtendedSequence};
use crate::domain::Tour;
use crate::loader::{LoadRequest, LoadResponse};
use crate::ui::viewmodel::CarouselViewModel;
use std::time::Duration;

/// Default time between autoplay advances.
pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(1900);

/// Default lifetime of the teleport guard.
pub const DEFAULT_TELEPORT_GUARD: Duration = Duration::from_millis(30);

/// Default number of tours requested for the featured feed.
pub const DEFAULT_FEED_PAGE_SIZE: usize = 200;

/// Tunables for a carousel instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselOptions {
    /// Period of the autoplay timer.
    pub autoplay_interval: Duration,
    /// How long clone landings are ignored after a teleport.
    pub teleport_guard: Duration,
    /// Page size of the featured-tours request.
    pub page_size: usize,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            autoplay_interval: DEFAULT_AUTOPLAY_INTERVAL,
            teleport_guard: DEFAULT_TELEPORT_GUARD,
            page_size: DEFAULT_FEED_PAGE_SIZE,
        }
    }
}

/// State of one carousel instance.
///
/// Mutated only through its transition methods, which the event handler
/// calls. Fields are public for inspection by hosts and tests.
#[derive(Debug, Clone)]
pub struct CarouselState {
    /// Real items in display order.
    pub items: Vec<Tour>,

    /// Extended sequence built from `items`.
    pub sequence: ExtendedSequence,

    /// Index conversion for the current item count.
    pub translator: IndexTranslator,

    /// Active slide in the extended sequence.
    pub render_index: usize,

    /// Active item in `items`. Drives the dot indicators.
    pub logical_index: usize,

    /// Whether autoplay is allowed to advance.
    pub autoplay: AutoplayMode,

    /// Loading status of the item list.
    pub content: ContentStatus,

    /// Measured start offset of each slide, indexed by render index.
    ///
    /// `None` marks a slide the host could not measure yet.
    pub offsets: Vec<Option<f64>>,

    /// Latest scroll offset reported by the host.
    pub scroll_offset: f64,

    /// Whether the carousel is attached to a viewport.
    pub mounted: bool,

    /// Set after a rebuild or mount until the first layout positions the
    /// viewport on the first real slide.
    pub needs_initial_position: bool,

    /// Frame requested to reconcile the latest scroll event.
    pub pending_frame: Option<FrameId>,

    /// Autoplay timer currently running on the host.
    pub autoplay_timer: Option<TimerId>,

    /// Active teleport guard. While set, clone landings are not corrected.
    pub teleporting: Option<GuardId>,

    /// Tunables this instance was created with.
    pub options: CarouselOptions,

    next_id: u64,
}

impl CarouselState {
    /// Creates an empty, unmounted carousel waiting for content.
    #[must_use]
    pub fn new(options: CarouselOptions) -> Self {
        Self {
            items: Vec::new(),
            sequence: ExtendedSequence::default(),
            translator: IndexTranslator::new(0),
            render_index: 0,
            logical_index: 0,
            autoplay: AutoplayMode::Running,
            content: ContentStatus::Loading,
            offsets: Vec::new(),
            scroll_offset: 0.0,
            mounted: false,
            needs_initial_position: true,
            pending_frame: None,
            autoplay_timer: None,
            teleporting: None,
            options,
            next_id: 0,
        }
    }

    /// Number of real items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The item currently shown as active, if any.
    #[must_use]
    pub fn active_item(&self) -> Option<&Tour> {
        self.items.get(self.logical_index)
    }

    /// Measured offset of the slide at `render_index`.
    #[must_use]
    pub fn offset_of(&self, render_index: usize) -> Option<f64> {
        self.offsets.get(render_index).copied().flatten()
    }

    /// Replaces the item list and rebuilds everything derived from it.
    ///
    /// The active position resets to the first real slide and the host must
    /// measure the new layout before the viewport is positioned.
    pub fn replace_items(&mut self, items: Vec<Tour>) -> Vec<Action> {
        let previous_count = self.items.len();
        let mut actions = vec![];

        self.items = items;
        self.sequence = build_sequence(self.items.len());
        self.translator = IndexTranslator::new(self.items.len());
        self.render_index = self.translator.first_real();
        self.logical_index = 0;
        self.offsets = vec![None; self.sequence.len()];
        self.needs_initial_position = true;
        self.teleporting = None;
        self.content = ContentStatus::Ready;

        if let Some(frame) = self.pending_frame.take() {
            actions.push(Action::CancelFrame(frame));
        }

        tracing::debug!(
            previous_count,
            item_count = self.items.len(),
            sequence_len = self.sequence.len(),
            clone_count = self.sequence.clone_count,
            "carousel rebuilt"
        );

        if previous_count == self.items.len() {
            self.sync_autoplay(&mut actions);
        } else {
            self.restart_autoplay(&mut actions);
        }

        actions
    }

    /// Attaches the carousel to a viewport.
    ///
    /// Requests the featured feed when nothing has been loaded yet.
    pub fn mount(&mut self) -> Vec<Action> {
        let mut actions = vec![];
        self.mounted = true;
        self.needs_initial_position = true;
        self.render_index = self.translator.first_real();
        self.logical_index = 0;

        if self.content == ContentStatus::Loading {
            actions.push(Action::Load(LoadRequest::featured(self.options.page_size)));
        }

        self.sync_autoplay(&mut actions);
        actions
    }

    /// Detaches the carousel, cancelling every outstanding callback.
    pub fn unmount(&mut self) -> Vec<Action> {
        let mut actions = vec![];
        self.mounted = false;
        self.teleporting = None;

        if let Some(frame) = self.pending_frame.take() {
            actions.push(Action::CancelFrame(frame));
        }
        self.sync_autoplay(&mut actions);
        actions
    }

    /// Stores freshly measured slide offsets.
    ///
    /// The first usable layout after a mount or rebuild positions the viewport
    /// on the active slide without animation. Later layouts (resizes)
    /// re-align the active slide, also without animation.
    pub fn apply_layout(&mut self, offsets: &[Option<f64>]) -> Vec<Action> {
        let mut actions = vec![];
        self.offsets = offsets.to_vec();
        self.offsets.resize(self.sequence.len(), None);

        if !self.mounted || self.sequence.is_empty() {
            return actions;
        }

        let Some(offset) = self.offset_of(self.render_index) else {
            tracing::debug!(render_index = self.render_index, "active slide not measured yet");
            return actions;
        };

        tracing::debug!(
            render_index = self.render_index,
            offset,
            initial = self.needs_initial_position,
            "aligning viewport"
        );
        self.needs_initial_position = false;
        self.scroll_offset = offset;
        actions.push(Action::ScrollTo {
            render_index: self.render_index,
            offset,
            behavior: ScrollBehavior::Instant,
        });
        actions
    }

    /// Moves one slide forward.
    pub fn next(&mut self) -> Vec<Action> {
        self.step(1)
    }

    /// Moves one slide back.
    pub fn prev(&mut self) -> Vec<Action> {
        self.step(-1)
    }

    fn step(&mut self, delta: isize) -> Vec<Action> {
        let mut actions = vec![];
        if self.item_count() <= 1 {
            return actions;
        }

        self.pause_into(&mut actions);

        let current = isize::try_from(self.render_index).unwrap_or(isize::MAX);
        let target = self.translator.wrap_for_navigation(current.saturating_add(delta));
        self.move_to(target, ScrollBehavior::Smooth, &mut actions);
        actions
    }

    /// Jumps to a real item by logical index.
    ///
    /// The index is clamped to the last item.
    pub fn go_to(&mut self, logical_index: usize) -> Vec<Action> {
        let mut actions = vec![];
        let n = self.item_count();
        if n == 0 {
            return actions;
        }

        self.pause_into(&mut actions);

        let logical = logical_index.min(n - 1);
        let target = self.translator.render_for_logical(logical);
        self.move_to(target, ScrollBehavior::Smooth, &mut actions);
        actions
    }

    /// Pauses autoplay. Idempotent.
    pub fn pause(&mut self) -> Vec<Action> {
        let mut actions = vec![];
        self.pause_into(&mut actions);
        actions
    }

    /// Resumes autoplay. Idempotent.
    pub fn resume(&mut self) -> Vec<Action> {
        let mut actions = vec![];
        if self.autoplay != AutoplayMode::Running {
            tracing::debug!("autoplay resumed");
            self.autoplay = AutoplayMode::Running;
            self.restart_autoplay(&mut actions);
        }
        actions
    }

    /// Changes the autoplay period, recreating the timer.
    pub fn set_interval(&mut self, interval: Duration) -> Vec<Action> {
        let mut actions = vec![];
        if interval.is_zero() || interval == self.options.autoplay_interval {
            return actions;
        }
        tracing::debug!(interval_ms = interval.as_millis(), "autoplay interval changed");
        self.options.autoplay_interval = interval;
        self.restart_autoplay(&mut actions);
        actions
    }

    /// Records a scroll position and schedules one reconciliation per frame.
    ///
    /// A frame that is still pending is cancelled and replaced, so a burst of
    /// scroll events costs a single reconciliation.
    pub fn on_scroll(&mut self, offset: f64) -> Vec<Action> {
        let mut actions = vec![];
        self.scroll_offset = offset;
        if !self.mounted {
            return actions;
        }

        if let Some(frame) = self.pending_frame.take() {
            actions.push(Action::CancelFrame(frame));
        }
        let frame = FrameId(self.allocate_id());
        self.pending_frame = Some(frame);
        actions.push(Action::RequestFrame(frame));
        actions
    }

    /// Runs the reconciliation requested by [`on_scroll`](Self::on_scroll).
    ///
    /// Frames other than the pending one are ignored.
    pub fn on_frame(&mut self, frame: FrameId) -> Vec<Action> {
        if self.pending_frame != Some(frame) {
            tracing::trace!(%frame, "ignoring superseded frame");
            return vec![];
        }
        self.pending_frame = None;
        self.reconcile()
    }

    /// Aligns the active indices with the slide nearest to the scroll offset.
    ///
    /// Landing on a clone outside an active teleport jumps instantly to the
    /// real slide it mirrors and raises the teleport guard until the guard
    /// reset arrives.
    pub fn reconcile(&mut self) -> Vec<Action> {
        let mut actions = vec![];
        if self.sequence.is_empty() {
            return actions;
        }

        let Some(nearest) = nearest_slide(&self.offsets, self.scroll_offset) else {
            return actions;
        };

        if nearest != self.render_index {
            tracing::trace!(from = self.render_index, to = nearest, "active slide follows scroll");
            self.render_index = nearest;
            self.logical_index = self.translator.to_logical(nearest);
        }

        if self.teleporting.is_some() {
            return actions;
        }

        let Some(mirror) = self.translator.mirror_of_clone(nearest) else {
            return actions;
        };
        let Some(offset) = self.offset_of(mirror) else {
            return actions;
        };

        let guard = GuardId(self.allocate_id());
        tracing::debug!(clone = nearest, target = mirror, %guard, "teleporting off clone");

        self.teleporting = Some(guard);
        self.render_index = mirror;
        self.logical_index = self.translator.to_logical(mirror);
        self.scroll_offset = offset;
        actions.push(Action::ScrollTo {
            render_index: mirror,
            offset,
            behavior: ScrollBehavior::Instant,
        });
        actions.push(Action::ScheduleGuardReset {
            guard,
            delay: self.options.teleport_guard,
        });
        actions
    }

    /// Lowers the teleport guard if `guard` is still the active one.
    pub fn on_guard_reset(&mut self, guard: GuardId) {
        if self.teleporting == Some(guard) {
            self.teleporting = None;
        }
    }

    /// Advances one slide for an autoplay tick.
    ///
    /// The target is `render_index + 1` without wrapping ahead of time, so
    /// ticks scroll onto the trailing clone and the reconciler teleports from
    /// there. Only a target past the end of the sequence is wrapped. Ticks from
    /// a timer that is no longer current are ignored.
    pub fn on_autoplay_tick(&mut self, timer: TimerId) -> Vec<Action> {
        let mut actions = vec![];
        if self.autoplay_timer != Some(timer) {
            tracing::trace!(%timer, "ignoring stale autoplay tick");
            return actions;
        }
        if self.item_count() <= 1 || !self.autoplay.is_running() {
            return actions;
        }

        let mut target = self.render_index + 1;
        if target > self.translator.last_index() {
            target = self
                .translator
                .wrap_for_navigation(isize::try_from(target).unwrap_or(isize::MAX));
        }
        self.move_to(target, ScrollBehavior::Smooth, &mut actions);
        actions
    }

    /// Applies a response from the content loader.
    pub fn on_content(&mut self, response: &LoadResponse) -> Vec<Action> {
        match response {
            LoadResponse::ToursLoaded { tours } => self.replace_items(tours.clone()),
            LoadResponse::TourLoaded { tour } => {
                tracing::debug!(found = tour.is_some(), "single tour response not used by carousel");
                vec![]
            }
            LoadResponse::Error { message } => {
                tracing::warn!(error = %message, "featured tours failed to load");
                let mut actions = vec![];
                self.content = ContentStatus::Failed {
                    message: message.clone(),
                };
                self.sync_autoplay(&mut actions);
                actions
            }
        }
    }

    /// Re-requests the featured feed after a failure.
    ///
    /// Ignored unless the last load failed, so a request is never doubled.
    pub fn retry(&mut self) -> Vec<Action> {
        let mut actions = vec![];
        if !matches!(self.content, ContentStatus::Failed { .. }) {
            return actions;
        }
        self.content = ContentStatus::Loading;
        self.sync_autoplay(&mut actions);
        actions.push(Action::Load(LoadRequest::featured(self.options.page_size)));
        actions
    }

    /// Builds the display model for the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> CarouselViewModel {
        CarouselViewModel::from_state(self)
    }

    fn move_to(&mut self, target: usize, behavior: ScrollBehavior, actions: &mut Vec<Action>) {
        self.render_index = target;
        self.logical_index = self.translator.to_logical(target);

        if let Some(offset) = self.offset_of(target) {
            actions.push(Action::ScrollTo {
                render_index: target,
                offset,
                behavior,
            });
        } else {
            tracing::debug!(render_index = target, "target slide not measured, skipping scroll");
        }
    }

    fn pause_into(&mut self, actions: &mut Vec<Action>) {
        if self.autoplay != AutoplayMode::Paused {
            tracing::debug!("autoplay paused");
            self.autoplay = AutoplayMode::Paused;
            self.restart_autoplay(actions);
        }
    }

    fn should_autoplay(&self) -> bool {
        self.mounted
            && self.autoplay.is_running()
            && self.item_count() > 1
            && self.content.is_ready()
    }

    /// Starts or stops the timer so it matches [`should_autoplay`](Self::should_autoplay).
    fn sync_autoplay(&mut self, actions: &mut Vec<Action>) {
        match (self.should_autoplay(), self.autoplay_timer) {
            (true, None) => {
                let timer = TimerId(self.allocate_id());
                tracing::debug!(%timer, interval_ms = self.options.autoplay_interval.as_millis(), "autoplay timer started");
                self.autoplay_timer = Some(timer);
                actions.push(Action::StartAutoplay {
                    timer,
                    interval: self.options.autoplay_interval,
                });
            }
            (false, Some(timer)) => {
                tracing::debug!(%timer, "autoplay timer stopped");
                self.autoplay_timer = None;
                actions.push(Action::StopAutoplay(timer));
            }
            _ => {}
        }
    }

    /// Tears the timer down and creates a fresh one if autoplay should run.
    fn restart_autoplay(&mut self, actions: &mut Vec<Action>) {
        if let Some(timer) = self.autoplay_timer.take() {
            tracing::debug!(%timer, "autoplay timer stopped");
            actions.push(Action::StopAutoplay(timer));
        }
        self.sync_autoplay(actions);
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Index of the measured slide whose offset is closest to `scroll_offset`.
///
/// Slides are scanned in order with a strict comparison, so ties resolve to
/// the lowest index. Unmeasured slides are skipped.
///
/// # Examples
///
/// ```
/// use tour_carousel::carousel::nearest_slide;
///
/// let offsets = [Some(0.0), None, Some(200.0), Some(300.0)];
/// assert_eq!(nearest_slide(&offsets, 90.0), Some(0));
/// assert_eq!(nearest_slide(&offsets, 250.0), Some(2));
/// assert_eq!(nearest_slide(&[None, None], 10.0), None);
/// ```
#[must_use]
pub fn nearest_slide(offsets: &[Option<f64>], scroll_offset: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, offset) in offsets.iter().enumerate() {
        let Some(offset) = offset else { continue };
        let distance = (offset - scroll_offset).abs();
        if best.map_or(true, |(_, closest)| distance < closest) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tours(n: usize) -> Vec<Tour> {
        (0..n)
            .map(|i| Tour::new(i as i64 + 1, format!("tour-{i}"), format!("Tour {i}")))
            .collect()
    }

    fn layout(len: usize) -> Vec<Option<f64>> {
        (0..len).map(|i| Some(i as f64 * 100.0)).collect()
    }

    fn mounted(n: usize) -> CarouselState {
        let mut state = CarouselState::new(CarouselOptions::default());
        state.replace_items(tours(n));
        state.mount();
        let offsets = layout(state.sequence.len());
        state.apply_layout(&offsets);
        state
    }

    #[test]
    fn first_layout_positions_instantly_on_first_real_slide() {
        let mut state = CarouselState::new(CarouselOptions::default());
        state.replace_items(tours(3));
        state.mount();
        let actions = state.apply_layout(&layout(5));
        assert_eq!(
            actions,
            vec![Action::ScrollTo {
                render_index: 1,
                offset: 100.0,
                behavior: ScrollBehavior::Instant
            }]
        );
        assert!(!state.needs_initial_position);
    }

    #[test]
    fn unmeasured_layout_is_a_silent_no_op() {
        let mut state = CarouselState::new(CarouselOptions::default());
        state.replace_items(tours(3));
        state.mount();
        assert!(state.apply_layout(&[None; 5]).is_empty());
        assert!(state.needs_initial_position);
    }

    #[test]
    fn navigation_is_disabled_for_one_item() {
        let mut state = mounted(1);
        assert!(state.next().is_empty());
        assert!(state.prev().is_empty());
        assert_eq!(state.render_index, 0);
        assert!(state.autoplay_timer.is_none());
    }

    #[test]
    fn prev_from_first_real_targets_left_clone() {
        let mut state = mounted(3);
        let actions = state.prev();
        assert!(actions.contains(&Action::ScrollTo {
            render_index: 0,
            offset: 0.0,
            behavior: ScrollBehavior::Smooth
        }));
        assert_eq!(state.logical_index, 2);
        assert_eq!(state.autoplay, AutoplayMode::Paused);
    }

    #[test]
    fn go_to_clamps_out_of_range_index() {
        let mut state = mounted(3);
        state.go_to(9);
        assert_eq!(state.logical_index, 2);
        assert_eq!(state.render_index, 3);
    }

    #[test]
    fn scroll_bursts_coalesce_into_one_frame() {
        let mut state = mounted(3);
        let first = state.on_scroll(120.0);
        let second = state.on_scroll(140.0);
        let Action::RequestFrame(first_frame) = first[0] else {
            panic!("expected frame request, got {first:?}");
        };
        assert_eq!(second[0], Action::CancelFrame(first_frame));
        assert!(state.on_frame(first_frame).is_empty());
        let pending = state.pending_frame.expect("frame pending");
        state.on_frame(pending);
        assert_eq!(state.render_index, 1);
        assert!(state.pending_frame.is_none());
    }

    #[test]
    fn landing_on_trailing_clone_teleports_to_first_real() {
        let mut state = mounted(3);
        state.scroll_offset = 400.0;
        let actions = state.reconcile();
        assert_eq!(state.render_index, 1);
        assert_eq!(state.logical_index, 0);
        assert_eq!(
            actions[0],
            Action::ScrollTo {
                render_index: 1,
                offset: 100.0,
                behavior: ScrollBehavior::Instant
            }
        );
        assert!(matches!(actions[1], Action::ScheduleGuardReset { delay, .. } if delay == DEFAULT_TELEPORT_GUARD));
    }

    #[test]
    fn guard_blocks_second_teleport_until_reset() {
        let mut state = mounted(3);
        state.scroll_offset = 0.0;
        state.reconcile();
        let guard = state.teleporting.expect("guard raised");
        assert_eq!(state.render_index, 3);

        state.scroll_offset = 400.0;
        assert!(state.reconcile().is_empty());
        assert_eq!(state.render_index, 4);

        state.on_guard_reset(GuardId(guard.0 + 100));
        assert!(state.teleporting.is_some());
        state.on_guard_reset(guard);
        assert!(state.teleporting.is_none());
    }

    #[test]
    fn stale_timer_ticks_are_ignored() {
        let mut state = mounted(3);
        let live = state.autoplay_timer.expect("timer running");
        assert!(state.on_autoplay_tick(TimerId(live.0 + 50)).is_empty());
        assert_eq!(state.render_index, 1);
        state.on_autoplay_tick(live);
        assert_eq!(state.render_index, 2);
    }

    #[test]
    fn interval_change_recreates_timer() {
        let mut state = mounted(3);
        let old = state.autoplay_timer.expect("timer running");
        let actions = state.set_interval(Duration::from_millis(2500));
        let new = state.autoplay_timer.expect("timer running");
        assert_ne!(old, new);
        assert_eq!(
            actions,
            vec![
                Action::StopAutoplay(old),
                Action::StartAutoplay {
                    timer: new,
                    interval: Duration::from_millis(2500)
                }
            ]
        );
    }

    #[test]
    fn unmount_cancels_frame_and_timer() {
        let mut state = mounted(3);
        let timer = state.autoplay_timer.expect("timer running");
        let Action::RequestFrame(frame) = state.on_scroll(130.0)[0] else {
            panic!("expected frame request");
        };
        let actions = state.unmount();
        assert!(actions.contains(&Action::CancelFrame(frame)));
        assert!(actions.contains(&Action::StopAutoplay(timer)));
    }

    #[test]
    fn content_error_then_retry_reloads() {
        let mut state = CarouselState::new(CarouselOptions::default());
        let actions = state.mount();
        assert_eq!(actions, vec![Action::Load(LoadRequest::featured(DEFAULT_FEED_PAGE_SIZE))]);
        state.on_content(&LoadResponse::Error {
            message: "(502) Bad Gateway".to_string(),
        });
        assert!(matches!(state.content, ContentStatus::Failed { .. }));
        let actions = state.retry();
        assert_eq!(state.content, ContentStatus::Loading);
        assert_eq!(actions, vec![Action::Load(LoadRequest::featured(DEFAULT_FEED_PAGE_SIZE))]);
    }

    #[test]
    fn retry_is_ignored_while_loading_or_ready() {
        let mut state = CarouselState::new(CarouselOptions::default());
        state.mount();
        assert_eq!(state.content, ContentStatus::Loading);
        assert!(state.retry().is_empty());

        state.on_content(&LoadResponse::ToursLoaded { tours: tours(2) });
        assert_eq!(state.content, ContentStatus::Ready);
        assert!(state.retry().is_empty());
    }

    #[test]
    fn nearest_slide_prefers_lowest_index_on_ties() {
        let offsets = [Some(0.0), Some(100.0), Some(200.0)];
        assert_eq!(nearest_slide(&offsets, 50.0), Some(0));
        assert_eq!(nearest_slide(&offsets, 150.0), Some(1));
    }
}
