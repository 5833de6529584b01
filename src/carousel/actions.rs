//! Actions representing side effects to be executed by the host.
//!
//! The reducer never scrolls, schedules, or fetches anything itself. Each call
//! to [`handle_event`](super::handle_event) returns a `Vec<Action>` and the
//! host executes them in order: scroll commands against the viewport,
//! animation-frame and timer registrations against its clock, and content
//! requests against a [`ContentLoader`](crate::loader::ContentLoader).
//!
//! Every scheduled callback carries an id. The host echoes the id back in the
//! matching [`Event`](super::Event) so the reducer can recognise callbacks that
//! were superseded in the meantime.
//!
//! # Example
//!
//! ```rust
//! use tour_carousel::carousel::{Action, FrameId, ScrollBehavior};
//!
//! let actions = vec![
//!     Action::CancelFrame(FrameId(3)),
//!     Action::RequestFrame(FrameId(4)),
//!     Action::ScrollTo { render_index: 1, offset: 588.0, behavior: ScrollBehavior::Instant },
//! ];
//! assert_eq!(actions.len(), 3);
//! ```

use crate::loader::LoadRequest;
use super::modes::ScrollBehavior;
use std::fmt;
use std::time::Duration;

/// Identifies one requested animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub u64);

/// Identifies one autoplay timer instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Identifies one teleport guard activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GuardId(pub u64);

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame#{}", self.0)
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

impl fmt::Display for GuardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "guard#{}", self.0)
    }
}

/// Commands the host executes after an event has been handled.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Scrolls the viewport so the slide at `render_index` is aligned.
    ///
    /// `offset` is the slide's measured start offset at the time the action
    /// was produced. Hosts scroll to the offset, the index is informational.
    ScrollTo {
        render_index: usize,
        offset: f64,
        behavior: ScrollBehavior,
    },

    /// Requests one animation-frame callback, delivered as
    /// [`Event::AnimationFrame`](super::Event::AnimationFrame).
    RequestFrame(FrameId),

    /// Cancels a previously requested frame that has not fired yet.
    CancelFrame(FrameId),

    /// Starts a repeating autoplay timer.
    ///
    /// Each period is delivered as [`Event::AutoplayTick`](super::Event::AutoplayTick).
    StartAutoplay {
        timer: TimerId,
        interval: Duration,
    },

    /// Stops a running autoplay timer.
    StopAutoplay(TimerId),

    /// Delivers [`Event::GuardReset`](super::Event::GuardReset) once after `delay`.
    ScheduleGuardReset {
        guard: GuardId,
        delay: Duration,
    },

    /// Asks the content loader for data.
    ///
    /// The answer comes back as [`Event::Content`](super::Event::Content).
    Load(LoadRequest),
}
