//! User interface layer: view models and a plain-text renderer.
//!
//! This module turns carousel state into display-ready data and, for terminal
//! hosts and tests, into text. Browser hosts consume the view model directly.
//!
//! # Architecture
//!
//! ```text
//! CarouselState → compute_viewmodel → CarouselViewModel → render → String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable text component renderers
//! - [`helpers`]: Shared text layout utilities

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel};
pub use viewmodel::{
    CarouselViewModel, Dot, EmptyState, ErrorState, FooterInfo, HeaderInfo, LoadingState, SlideCard,
};
