//! Mode types for the carousel state machine.
//!
//! - [`AutoplayMode`]: whether the autoplay timer should be running
//! - [`ScrollBehavior`]: how the host should animate a scroll command
//! - [`ContentStatus`]: where the item list came from and whether it is usable
//!
//! # Example
//!
//! ```rust
//! use tour_carousel::carousel::{AutoplayMode, ScrollBehavior};
//!
//! let mode = AutoplayMode::Running;
//! assert!(mode.is_running());
//! assert_eq!(ScrollBehavior::default(), ScrollBehavior::Smooth);
//! ```

use serde::{Deserialize, Serialize};

/// Autoplay state.
///
/// Paused while the pointer hovers the carousel, while focus is inside it, and
/// after any user navigation until the pointer leaves or focus moves out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoplayMode {
    /// Advancing one slide per interval.
    #[default]
    Running,
    /// Timer stopped until a resume trigger arrives.
    Paused,
}

impl AutoplayMode {
    #[must_use]
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}

/// Scroll animation requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    /// Animated scroll. Used for every user or autoplay movement.
    #[default]
    Smooth,
    /// Jump without animation. Used for initial positioning, resize
    /// re-alignment and clone teleports.
    Instant,
}

/// Lifecycle of the item list backing the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContentStatus {
    /// Waiting for the first content response.
    #[default]
    Loading,
    /// Items are present (possibly zero of them).
    Ready,
    /// The last load failed; the user can retry.
    Failed {
        /// Message suitable for display.
        message: String,
    },
}

impl ContentStatus {
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}
