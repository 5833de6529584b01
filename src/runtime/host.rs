//! Deterministic single-threaded host for the carousel.
//!
//! [`SimulatedHost`] plays the part a browser plays in production: it owns a
//! viewport with a scroll offset, measures slide positions, runs smooth-scroll
//! animations, fires animation frames, timers and delayed callbacks, and feeds
//! everything back through [`handle_event`]. Time is virtual and only moves
//! when [`SimulatedHost::advance`] is called, so runs are reproducible to the
//! millisecond.
//!
//! # Frame order
//!
//! Each frame (default 16 ms) runs, in order:
//!
//! 1. due guard resets, then a due autoplay tick
//! 2. animation frames requested before this frame
//! 3. smooth-scroll progress, reported as a scroll event
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use tour_carousel::carousel::{CarouselOptions, CarouselState, Event};
//! use tour_carousel::runtime::{HostOptions, SimulatedHost};
//! use tour_carousel::Tour;
//!
//! let state = CarouselState::new(CarouselOptions::default());
//! let mut host = SimulatedHost::new(state, HostOptions::default());
//! host.dispatch(Event::ItemsReplaced(vec![Tour::new(1, "a", "A"), Tour::new(2, "b", "B")]))?;
//! host.dispatch(Event::Mounted)?;
//! host.advance(Duration::from_millis(2500))?;
//! assert_eq!(host.state.logical_index, 1);
//! # Ok::<(), tour_carousel::CarouselError>(())
//! ```

use crate::carousel::{handle_event, Action, CarouselState, Event, FrameId, GuardId, ScrollBehavior, TimerId};
use crate::domain::Result;
use crate::loader::{ContentLoader, LoadRequest, LoadResponse};
use std::collections::VecDeque;
use std::time::Duration;

/// Default frame period, roughly 60 Hz.
pub const DEFAULT_FRAME: Duration = Duration::from_millis(16);

/// Default duration of a smooth scroll.
pub const DEFAULT_SMOOTH_SCROLL: Duration = Duration::from_millis(320);

/// Most actions kept in the [`SimulatedHost::executed`] log.
pub const EXECUTED_LOG_CAP: usize = 1024;

/// Geometry and timing of the simulated viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostOptions {
    pub frame: Duration,
    pub smooth_scroll: Duration,
    /// Width of one slide.
    pub slide_width: f64,
    /// Gap between adjacent slides.
    pub slide_gap: f64,
}

impl Default for HostOptions {
    fn default() -> Self {
        Self {
            frame: DEFAULT_FRAME,
            smooth_scroll: DEFAULT_SMOOTH_SCROLL,
            slide_width: 560.0,
            slide_gap: 28.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Animation {
    from: f64,
    to: f64,
    started: Duration,
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    id: TimerId,
    interval: Duration,
    next_due: Duration,
}

/// Virtual-clock host executing carousel actions.
pub struct SimulatedHost {
    /// The carousel being hosted.
    pub state: CarouselState,
    options: HostOptions,
    loader: Option<ContentLoader>,
    now: Duration,
    scroll_offset: f64,
    animation: Option<Animation>,
    pending_frames: Vec<FrameId>,
    timer: Option<Timer>,
    guard_resets: Vec<(GuardId, Duration)>,
    pending_loads: VecDeque<LoadRequest>,
    events: VecDeque<Event>,
    layout_queued: bool,
    executed: Vec<(Duration, Action)>,
    renders: usize,
}

impl SimulatedHost {
    #[must_use]
    pub fn new(state: CarouselState, options: HostOptions) -> Self {
        Self {
            state,
            options,
            loader: None,
            now: Duration::ZERO,
            scroll_offset: 0.0,
            animation: None,
            pending_frames: Vec::new(),
            timer: None,
            guard_resets: Vec::new(),
            pending_loads: VecDeque::new(),
            events: VecDeque::new(),
            layout_queued: false,
            executed: Vec::new(),
            renders: 0,
        }
    }

    /// Answers load actions inline with `loader` instead of queueing them.
    #[must_use]
    pub fn with_loader(mut self, loader: ContentLoader) -> Self {
        self.loader = Some(loader);
        self
    }

    /// Virtual time elapsed since the host was created.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Current viewport scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Recently executed actions, oldest first, with the virtual time each ran
    /// at. Holds at most [`EXECUTED_LOG_CAP`] entries.
    #[must_use]
    pub fn executed(&self) -> &[(Duration, Action)] {
        &self.executed
    }

    /// Number of events after which the carousel asked to be re-rendered.
    #[must_use]
    pub const fn render_count(&self) -> usize {
        self.renders
    }

    /// Whether an autoplay timer is currently scheduled.
    #[must_use]
    pub const fn autoplay_scheduled(&self) -> bool {
        self.timer.is_some()
    }

    /// Whether a smooth scroll is in progress.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Removes and returns load requests waiting for an answer.
    pub fn take_loads(&mut self) -> Vec<LoadRequest> {
        self.pending_loads.drain(..).collect()
    }

    /// Delivers a content response produced outside the host.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn deliver(&mut self, response: LoadResponse) -> Result<()> {
        self.dispatch(Event::Content(response))
    }

    /// Delivers an event and everything it causes synchronously.
    ///
    /// Follow-up events produced while executing actions (instant scrolls,
    /// layout measurements, inline loads) are handled before returning.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn dispatch(&mut self, event: Event) -> Result<()> {
        self.events.push_back(event);

        while let Some(event) = self.events.pop_front() {
            if matches!(event, Event::LayoutMeasured { .. }) {
                self.layout_queued = false;
            }

            let (should_render, actions) = handle_event(&mut self.state, &event)?;
            if should_render {
                self.renders += 1;
            }
            for action in actions {
                self.execute(action);
            }

            if self.needs_layout() {
                self.layout_queued = true;
                self.events.push_back(Event::LayoutMeasured {
                    offsets: self.measure(),
                });
            }
        }
        Ok(())
    }

    /// Moves virtual time forward frame by frame.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn advance(&mut self, duration: Duration) -> Result<()> {
        let target = self.now + duration;
        while self.now < target {
            let step = self.options.frame.min(target - self.now);
            self.now += step;
            self.run_frame()?;
        }
        Ok(())
    }

    /// Simulates the user dragging or wheeling the viewport to `offset`.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn user_scroll(&mut self, offset: f64) -> Result<()> {
        self.animation = None;
        self.scroll_offset = offset;
        self.dispatch(Event::Scrolled { offset })
    }

    /// Changes the slide width and re-measures, as a window resize would.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn resize(&mut self, slide_width: f64) -> Result<()> {
        self.options.slide_width = slide_width;
        let offsets = self.measure();
        self.dispatch(Event::LayoutMeasured { offsets })
    }

    /// Start offset of every slide for the current geometry.
    #[must_use]
    pub fn measure(&self) -> Vec<Option<f64>> {
        let pitch = self.options.slide_width + self.options.slide_gap;
        (0..self.state.sequence.len())
            .map(|i| Some(i as f64 * pitch))
            .collect()
    }

    fn needs_layout(&self) -> bool {
        self.state.mounted
            && self.state.needs_initial_position
            && !self.state.sequence.is_empty()
            && !self.layout_queued
    }

    fn run_frame(&mut self) -> Result<()> {
        let now = self.now;

        let due: Vec<GuardId> = self
            .guard_resets
            .iter()
            .filter(|(_, at)| *at <= now)
            .map(|(guard, _)| *guard)
            .collect();
        self.guard_resets.retain(|(_, at)| *at > now);
        for guard in due {
            self.dispatch(Event::GuardReset(guard))?;
        }

        if let Some(timer) = self.timer.as_mut() {
            if timer.next_due <= now {
                timer.next_due += timer.interval;
                let id = timer.id;
                self.dispatch(Event::AutoplayTick(id))?;
            }
        }

        for frame in std::mem::take(&mut self.pending_frames) {
            self.dispatch(Event::AnimationFrame(frame))?;
        }

        if let Some(animation) = self.animation {
            let elapsed = now.saturating_sub(animation.started);
            let progress = if self.options.smooth_scroll.is_zero() {
                1.0
            } else {
                (elapsed.as_secs_f64() / self.options.smooth_scroll.as_secs_f64()).min(1.0)
            };
            let offset = animation.from + (animation.to - animation.from) * ease_in_out(progress);
            if progress >= 1.0 {
                self.animation = None;
            }
            self.scroll_offset = offset;
            self.dispatch(Event::Scrolled { offset })?;
        }

        Ok(())
    }

    fn execute(&mut self, action: Action) {
        tracing::trace!(at_ms = self.now.as_millis(), action = ?action, "host executing action");

        match &action {
            Action::ScrollTo { offset, behavior, .. } => match behavior {
                ScrollBehavior::Instant => {
                    self.animation = None;
                    if (self.scroll_offset - offset).abs() > f64::EPSILON {
                        self.scroll_offset = *offset;
                        self.events.push_back(Event::Scrolled { offset: *offset });
                    }
                }
                ScrollBehavior::Smooth => {
                    if (self.scroll_offset - offset).abs() > f64::EPSILON {
                        self.animation = Some(Animation {
                            from: self.scroll_offset,
                            to: *offset,
                            started: self.now,
                        });
                    }
                }
            },
            Action::RequestFrame(frame) => self.pending_frames.push(*frame),
            Action::CancelFrame(frame) => self.pending_frames.retain(|f| f != frame),
            Action::StartAutoplay { timer, interval } => {
                self.timer = Some(Timer {
                    id: *timer,
                    interval: *interval,
                    next_due: self.now + *interval,
                });
            }
            Action::StopAutoplay(timer) => {
                if self.timer.is_some_and(|t| t.id == *timer) {
                    self.timer = None;
                }
            }
            Action::ScheduleGuardReset { guard, delay } => {
                self.guard_resets.push((*guard, self.now + *delay));
            }
            Action::Load(request) => match &self.loader {
                Some(loader) => {
                    let response = loader.handle_request(request);
                    self.events.push_back(Event::Content(response));
                }
                None => self.pending_loads.push_back(request.clone()),
            },
        }

        if self.executed.len() >= EXECUTED_LOG_CAP {
            self.executed.drain(..EXECUTED_LOG_CAP / 2);
        }
        self.executed.push((self.now, action));
    }
}

/// Smooth-step easing, like the browser's default scroll curve.
fn ease_in_out(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::CarouselOptions;
    use crate::domain::Tour;

    fn host(n: usize) -> SimulatedHost {
        let mut host = SimulatedHost::new(CarouselState::new(CarouselOptions::default()), HostOptions::default());
        let tours = (0..n)
            .map(|i| Tour::new(i as i64, format!("t{i}"), format!("T{i}")))
            .collect();
        host.dispatch(Event::ItemsReplaced(tours)).unwrap();
        host.dispatch(Event::Mounted).unwrap();
        host
    }

    #[test]
    fn mount_measures_and_positions_instantly() {
        let host = host(3);
        assert_eq!(host.scroll_offset(), 588.0);
        assert!(!host.is_animating());
        assert!(host
            .executed()
            .iter()
            .any(|(_, a)| matches!(a, Action::ScrollTo { behavior: ScrollBehavior::Instant, render_index: 1, .. })));
    }

    #[test]
    fn smooth_scroll_settles_on_target() {
        let mut host = host(3);
        host.dispatch(Event::Next).unwrap();
        assert!(host.is_animating());
        host.advance(Duration::from_millis(400)).unwrap();
        assert!(!host.is_animating());
        assert_eq!(host.scroll_offset(), 1176.0);
        assert_eq!(host.state.render_index, 2);
    }

    #[test]
    fn resize_realigns_without_animation() {
        let mut host = host(3);
        host.resize(300.0).unwrap();
        assert_eq!(host.scroll_offset(), 328.0);
        assert!(!host.is_animating());
        assert_eq!(host.state.render_index, 1);
    }

    #[test]
    fn action_log_stays_bounded_over_long_runs() {
        let mut host = host(3);
        host.advance(Duration::from_secs(600)).unwrap();
        assert!(host.executed().len() <= EXECUTED_LOG_CAP);
        let (last_at, _) = host.executed().last().unwrap();
        assert!(host.now() - *last_at < Duration::from_secs(2));
    }

    #[test]
    fn loads_queue_without_a_loader() {
        let mut host = SimulatedHost::new(CarouselState::new(CarouselOptions::default()), HostOptions::default());
        host.dispatch(Event::Mounted).unwrap();
        assert_eq!(host.take_loads(), vec![LoadRequest::featured(200)]);
        host.deliver(LoadResponse::ToursLoaded { tours: vec![Tour::new(1, "a", "A")] }).unwrap();
        assert_eq!(host.state.item_count(), 1);
        assert_eq!(host.scroll_offset(), 0.0);
    }
}
