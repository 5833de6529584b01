//! Domain layer for the tour carousel.
//!
//! Core types independent of the CMS wire format and of any host runtime.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`tour`]: Tour display record
//!
//! # Examples
//!
//! ```
//! use tour_carousel::domain::{Result, Tour};
//!
//! fn featured() -> Result<Vec<Tour>> {
//!     Ok(vec![Tour::new(1, "kilimanjaro-machame", "Kilimanjaro via Machame")])
//! }
//! # assert_eq!(featured().unwrap().len(), 1);
//! ```

pub mod error;
pub mod tour;

pub use error::{CarouselError, Result};
pub use tour::Tour;
