//! Looping carousel state machine.
//!
//! This module is the core of the crate: a headless carousel that scrolls
//! through a list of tours endlessly. It sits between a host runtime (a
//! browser shim, a terminal UI, or [`SimulatedHost`](crate::runtime::SimulatedHost))
//! and the content layer.
//!
//! # Architecture
//!
//! ```text
//! Host Events → handle_event → State Mutations → Actions → Host Side Effects
//!                    ↑                                          ↓
//!                    └──────── frames, timers, scroll, content ─┘
//! ```
//!
//! The loop illusion comes from an extended sequence with one clone at each
//! end. The reconciler watches scroll positions and, when the viewport comes
//! to rest on a clone, jumps instantly to the real slide showing the same item.
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands and callback ids
//! - [`handler`]: Event dispatch and render decisions
//! - [`index`]: Render/logical index translation and wrapping
//! - [`modes`]: Autoplay, scroll behavior, and content status enums
//! - [`sequence`]: Extended sequence construction
//! - [`state`]: State container, transitions, and the reconciler
//!
//! # Example
//!
//! ```rust
//! use tour_carousel::carousel::{handle_event, Action, CarouselOptions, CarouselState, Event};
//! use tour_carousel::Tour;
//!
//! let mut state = CarouselState::new(CarouselOptions::default());
//! let tours = vec![Tour::new(1, "a", "A"), Tour::new(2, "b", "B"), Tour::new(3, "c", "C")];
//! handle_event(&mut state, &Event::ItemsReplaced(tours))?;
//! handle_event(&mut state, &Event::Mounted)?;
//!
//! let offsets = (0..5).map(|i| Some(f64::from(i) * 100.0)).collect();
//! let (_, actions) = handle_event(&mut state, &Event::LayoutMeasured { offsets })?;
//! assert!(matches!(actions[0], Action::ScrollTo { render_index: 1, .. }));
//! # Ok::<(), tour_carousel::CarouselError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod index;
pub mod modes;
pub mod sequence;
pub mod state;

pub use actions::{Action, FrameId, GuardId, TimerId};
pub use handler::{handle_event, Event};
pub use index::IndexTranslator;
pub use modes::{AutoplayMode, ContentStatus, ScrollBehavior};
pub use sequence::{build_sequence, ExtendedSequence, Slide};
pub use state::{nearest_slide, CarouselOptions, CarouselState};
