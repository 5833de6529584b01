//! Content loader for the carousel.
//!
//! The carousel never calls a content source directly. It emits
//! [`Action::Load`](crate::carousel::Action::Load) with a [`LoadRequest`]; the
//! host hands the request to a [`ContentLoader`] (inline or on its thread) and
//! feeds the [`LoadResponse`] back as an event.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types
//! - `handler`: Loader implementation and background thread handle

pub mod handler;
pub mod messages;

pub use handler::{ContentLoader, LoaderHandle};
pub use messages::{LoadRequest, LoadResponse};
