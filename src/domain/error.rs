//! Error types for the tour carousel.
//!
//! This module defines the centralized error type [`CarouselError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented with the
//! `thiserror` crate. Only the content layer and configuration loading produce
//! errors; the carousel reducer itself degrades to empty or default states.

use thiserror::Error;

/// The main error type for carousel and content operations.
///
/// Most variants wrap underlying errors from external crates using `#[from]` for
/// automatic conversion.
///
/// # Examples
///
/// ```
/// use tour_carousel::CarouselError;
///
/// fn validate_config() -> Result<(), CarouselError> {
///     Err(CarouselError::Config("cms.base_url is empty".to_string()))
/// }
///
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum CarouselError {
    /// The content source answered, but not with something usable.
    ///
    /// Carries the already formatted message, e.g. `"(404) Not Found"`.
    #[error("Content error: {0}")]
    Content(String),

    /// Transport-level HTTP failure (connect, timeout, TLS, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON document could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A URL could not be parsed or joined.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// The background loader thread is gone.
    #[error("Loader error: {0}")]
    Loader(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for carousel operations.
pub type Result<T> = std::result::Result<T, CarouselError>;
