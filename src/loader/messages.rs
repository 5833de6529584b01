//! Loader message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the host
//! thread running the carousel and the loader thread that talks to the
//! content source. Both types serialize to JSON so hosts that bridge to a
//! browser can forward them unchanged.

use crate::domain::Tour;
use serde::{Deserialize, Serialize};

/// Requests sent from the host to the loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LoadRequest {
    /// Newest tours, first page, filtered to featured ones.
    FeaturedTours {
        /// Number of tours fetched before the featured filter is applied.
        page_size: usize,
    },

    /// A single tour by slug.
    TourBySlug {
        slug: String,
    },
}

impl LoadRequest {
    /// Creates a `FeaturedTours` request.
    #[must_use]
    pub const fn featured(page_size: usize) -> Self {
        Self::FeaturedTours { page_size }
    }

    /// Creates a `TourBySlug` request.
    #[must_use]
    pub fn tour_by_slug(slug: impl Into<String>) -> Self {
        Self::TourBySlug { slug: slug.into() }
    }
}

/// Responses sent from the loader back to the host.
///
/// Each variant corresponds to the completion of one request, either with
/// data or with a message suitable for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LoadResponse {
    /// Featured tours, newest first.
    ToursLoaded {
        tours: Vec<Tour>,
    },

    /// Result of a slug lookup; `None` when no tour has the slug.
    TourLoaded {
        tour: Option<Tour>,
    },

    /// The request failed.
    Error {
        /// Human-readable error message, e.g. `"(404) Not Found"`.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_serialize_with_type_tag() {
        let json = serde_json::to_string(&LoadRequest::featured(200)).unwrap();
        assert_eq!(json, r#"{"type":"featured_tours","page_size":200}"#);
        let back: LoadRequest = serde_json::from_str(r#"{"type":"tour_by_slug","slug":"x"}"#).unwrap();
        assert_eq!(back, LoadRequest::tour_by_slug("x"));
    }
}
