//! Tour Carousel: a headless looping carousel for a tour operator's
//! featured-tours showcase, plus the CMS content layer that feeds it.
//!
//! The carousel is platform-neutral. It never touches a DOM, a clock or a
//! socket; hosts deliver [`Event`]s and execute the [`Action`]s that come
//! back. Content arrives through an injected [`content::ContentSource`].

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host (runtime::SimulatedHost, main.rs, browsers)   │  ← Executes actions
//! └─────────────────────────────────────────────────────┘
//!                        │ Event ↓   ↑ Action
//! ┌─────────────────────────────────────────────────────┐
//! │  Carousel (carousel/)                               │  ← State machine
//! │  - Extended sequence + index translation            │
//! │  - Scroll reconciliation + teleport                 │
//! │  - Autoplay lifecycle                               │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Content Layer │   │ Loader        │
//! │ (ui/)         │   │ (content/)    │   │ (loader/)     │
//! │ - View model  │   │ - CMS queries │   │ - Requests    │
//! │ - Text render │   │ - Normalizing │   │ - Background  │
//! │ - Components  │   │ - HTTP / file │   │   thread      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Paths (infrastructure/)                          │
//! │  - Error types (domain/error)                       │
//! │  - Tour model (domain/tour)                         │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing-subscriber setup, rotating log file      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`carousel`]: Carousel state machine with event/action model
//! - [`content`]: CMS queries, entity normalization, HTTP and file sources
//! - [`loader`]: Load requests/responses and the background loader
//! - [`domain`]: Core domain types (Tour, errors)
//! - [`infrastructure`]: Path utilities
//! - [`runtime`]: Deterministic simulated host
//! - [`ui`]: View model and plain-text rendering
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! ```toml
//! trace_level = "debug"
//!
//! [cms]
//! base_url = "https://cms.example.com"
//! api_token = "secret"
//!
//! [content]
//! source = "http"
//!
//! [carousel]
//! autoplay_interval_ms = 1900
//! ```
//!
//! `TOUR_CAROUSEL_CMS_URL`, `TOUR_CAROUSEL_API_TOKEN`, `TOUR_CAROUSEL_SOURCE`
//! and `TOUR_CAROUSEL_FILE` override the file.
//!
//! # Example
//!
//! ```rust
//! use tour_carousel::{handle_event, initialize, Config, Event, Tour};
//!
//! let mut state = initialize(&Config::default());
//!
//! let events = vec![
//!     Event::ItemsReplaced(vec![Tour::new(1, "a", "A"), Tour::new(2, "b", "B")]),
//!     Event::Mounted,
//!     Event::Next,
//! ];
//! for event in events {
//!     let (_render, actions) = handle_event(&mut state, &event)?;
//!     // Execute actions...
//!     let _ = actions;
//! }
//! assert_eq!(state.logical_index, 1);
//! # Ok::<(), tour_carousel::CarouselError>(())
//! ```

pub mod carousel;
pub mod content;
pub mod domain;
pub mod infrastructure;
pub mod loader;
pub mod runtime;

pub mod ui;

pub mod observability;

pub use carousel::{handle_event, Action, CarouselOptions, CarouselState, Event};
pub use domain::{CarouselError, Result, Tour};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding `cms.base_url`.
pub const ENV_CMS_URL: &str = "TOUR_CAROUSEL_CMS_URL";
/// Environment variable overriding `cms.api_token`.
pub const ENV_API_TOKEN: &str = "TOUR_CAROUSEL_API_TOKEN";
/// Environment variable overriding `content.source`.
pub const ENV_SOURCE: &str = "TOUR_CAROUSEL_SOURCE";
/// Environment variable overriding `content.file`.
pub const ENV_FILE: &str = "TOUR_CAROUSEL_FILE";

/// Application configuration.
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tracing level filter, used when `RUST_LOG` is unset.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any
    /// `EnvFilter` directive. Default: `"info"`
    pub trace_level: String,

    /// Log file; stderr when unset.
    pub log_file: Option<PathBuf>,

    pub cms: CmsSettings,
    pub content: ContentSettings,
    pub carousel: CarouselSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trace_level: "info".to_string(),
            log_file: None,
            cms: CmsSettings::default(),
            content: ContentSettings::default(),
            carousel: CarouselSettings::default(),
        }
    }
}

/// Connection to the headless CMS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CmsSettings {
    /// Origin of the CMS, without the `/api` suffix.
    pub base_url: String,
    /// Bearer token sent with every request.
    pub api_token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for CmsSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:1337".to_string(),
            api_token: None,
            timeout_secs: content::http::DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

/// Where tours are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Live CMS over HTTP.
    #[default]
    Http,
    /// Saved CMS response on disk.
    File,
}

impl std::str::FromStr for SourceKind {
    type Err = CarouselError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "file" => Ok(Self::File),
            other => Err(CarouselError::Config(format!("unknown content source '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSettings {
    pub source: SourceKind,
    /// Saved collection response, required when `source = "file"`.
    pub file: Option<PathBuf>,
    /// Image used when a tour has no cover image.
    pub placeholder_image: String,
    /// Page size of the featured-tours request.
    pub page_size: usize,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            source: SourceKind::Http,
            file: None,
            placeholder_image: content::normalize::DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            page_size: carousel::state::DEFAULT_FEED_PAGE_SIZE,
        }
    }
}

/// Carousel timing and the simulated host's geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    pub autoplay_interval_ms: u64,
    pub teleport_guard_ms: u64,
    pub slide_width: f64,
    pub slide_gap: f64,
    pub smooth_scroll_ms: u64,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 1900,
            teleport_guard_ms: 30,
            slide_width: 560.0,
            slide_gap: 28.0,
            smooth_scroll_ms: 320,
        }
    }
}

impl Config {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::Config`] if the document is not valid TOML, a
    /// value has the wrong type, or `autoplay_interval_ms` is zero.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input).map_err(|e| CarouselError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.carousel.autoplay_interval_ms == 0 {
            return Err(CarouselError::Config(
                "carousel.autoplay_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a config error if
    /// it does not parse.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Applies `TOUR_CAROUSEL_*` overrides from `env`.
    ///
    /// Empty values are ignored, as is an unrecognized `TOUR_CAROUSEL_SOURCE`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use tour_carousel::{Config, SourceKind};
    ///
    /// let mut env = BTreeMap::new();
    /// env.insert("TOUR_CAROUSEL_SOURCE".to_string(), "file".to_string());
    /// env.insert("TOUR_CAROUSEL_FILE".to_string(), "/srv/tours.json".to_string());
    ///
    /// let config = Config::default().with_env(&env);
    /// assert_eq!(config.content.source, SourceKind::File);
    /// ```
    #[must_use]
    pub fn with_env(mut self, env: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| env.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        if let Some(url) = get(ENV_CMS_URL) {
            self.cms.base_url = url.to_string();
        }
        if let Some(token) = get(ENV_API_TOKEN) {
            self.cms.api_token = Some(token.to_string());
        }
        if let Some(source) = get(ENV_SOURCE) {
            match source.parse() {
                Ok(kind) => self.content.source = kind,
                Err(e) => tracing::warn!(error = %e, "ignoring {ENV_SOURCE}"),
            }
        }
        if let Some(file) = get(ENV_FILE) {
            self.content.file = Some(PathBuf::from(file));
        }
        self
    }

    /// Loads `path` (or defaults when `None`) and applies the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Config::from_file`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let env: BTreeMap<String, String> = std::env::vars()
            .filter(|(key, _)| key.starts_with("TOUR_CAROUSEL_"))
            .collect();
        Ok(config.with_env(&env))
    }

    #[must_use]
    pub const fn cms_timeout(&self) -> Duration {
        Duration::from_secs(self.cms.timeout_secs)
    }

    /// Carousel tunables derived from this config.
    #[must_use]
    pub const fn carousel_options(&self) -> CarouselOptions {
        CarouselOptions {
            autoplay_interval: Duration::from_millis(self.carousel.autoplay_interval_ms),
            teleport_guard: Duration::from_millis(self.carousel.teleport_guard_ms),
            page_size: self.content.page_size,
        }
    }

    /// Geometry and timing for [`runtime::SimulatedHost`].
    #[must_use]
    pub const fn host_options(&self) -> runtime::HostOptions {
        runtime::HostOptions {
            frame: runtime::DEFAULT_FRAME,
            smooth_scroll: Duration::from_millis(self.carousel.smooth_scroll_ms),
            slide_width: self.carousel.slide_width,
            slide_gap: self.carousel.slide_gap,
        }
    }
}

/// Creates an unmounted carousel configured from `config`.
///
/// The carousel starts in the loading state; mounting it emits the
/// featured-tours load request.
#[must_use]
pub fn initialize(config: &Config) -> CarouselState {
    tracing::debug!(
        source = ?config.content.source,
        autoplay_interval_ms = config.carousel.autoplay_interval_ms,
        "initializing tour carousel"
    );
    CarouselState::new(config.carousel_options())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.cms_timeout(), Duration::from_secs(20));
        assert_eq!(config.carousel_options(), CarouselOptions::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml_str(
            r#"
            [carousel]
            autoplay_interval_ms = 2500

            [content]
            source = "file"
            file = "~/tours.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.carousel.autoplay_interval_ms, 2500);
        assert_eq!(config.carousel.teleport_guard_ms, 30);
        assert_eq!(config.content.source, SourceKind::File);
        assert_eq!(config.content.page_size, 200);
        assert_eq!(config.cms.base_url, "http://localhost:1337");
    }

    #[test]
    fn bad_source_is_a_config_error() {
        let err = Config::from_toml_str("[content]\nsource = \"ftp\"").unwrap_err();
        assert!(matches!(err, CarouselError::Config(_)));
    }

    #[test]
    fn env_overrides_and_ignores_garbage() {
        let env = BTreeMap::from([
            (ENV_CMS_URL.to_string(), "https://cms.example.com".to_string()),
            (ENV_API_TOKEN.to_string(), "  ".to_string()),
            (ENV_SOURCE.to_string(), "carrier-pigeon".to_string()),
        ]);
        let config = Config::default().with_env(&env);
        assert_eq!(config.cms.base_url, "https://cms.example.com");
        assert_eq!(config.cms.api_token, None);
        assert_eq!(config.content.source, SourceKind::Http);
    }

    #[test]
    fn initialize_uses_configured_interval() {
        let mut config = Config::default();
        config.carousel.autoplay_interval_ms = 500;
        let state = initialize(&config);
        assert_eq!(state.options.autoplay_interval, Duration::from_millis(500));
        assert!(!state.mounted);
    }
}
