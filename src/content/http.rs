//! Live CMS content source.
//!
//! Talks to the CMS REST API with a blocking `reqwest` client. Blocking is
//! fine here: requests run on the loader thread, never on the host loop.
//!
//! # Error messages
//!
//! Non-success responses become [`CarouselError::Content`] with the message
//! `"(status) message"`, where the message comes from the CMS error payload
//! (`error.message`, then the first validation detail) or, failing that, the
//! status's canonical reason.

use crate::content::backend::ContentSource;
use crate::content::models::{CollectionResponse, TourPage};
use crate::content::normalize::{tours_from_response, NormalizeOptions};
use crate::content::query::{slug_query, TourQuery};
use crate::domain::{CarouselError, Result, Tour};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Content source backed by the CMS REST API.
pub struct HttpContentSource {
    client: Client,
    api_base: String,
    token: Option<String>,
    options: NormalizeOptions,
}

impl HttpContentSource {
    /// Creates a source for the CMS at `base_url`.
    ///
    /// Trailing slashes are trimmed and `/api` is appended for requests. The
    /// trimmed base is also the origin used for relative media URLs. A blank
    /// token is treated as no token.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::Config`] if `base_url` is empty and
    /// [`CarouselError::Url`] if it is not an absolute URL.
    pub fn new(
        base_url: &str,
        api_token: Option<&str>,
        timeout: Duration,
        placeholder_image: &str,
    ) -> Result<Self> {
        let base = base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(CarouselError::Config("cms.base_url is empty".to_string()));
        }
        Url::parse(base)?;

        let client = Client::builder().timeout(timeout).build()?;
        let token = api_token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        tracing::debug!(base_url = %base, has_token = token.is_some(), timeout_ms = timeout.as_millis(), "http content source ready");

        Ok(Self {
            client,
            api_base: format!("{base}/api"),
            token,
            options: NormalizeOptions {
                base_url: base.to_string(),
                placeholder_image: placeholder_image.to_string(),
            },
        })
    }

    /// Base of every request, e.g. `https://cms.example.com/api`.
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn get_collection(&self, path_and_query: &str) -> Result<CollectionResponse> {
        let url = format!("{}{path_and_query}", self.api_base);
        let _span = tracing::debug_span!("cms_get", url = %url).entered();

        let mut request = self.client.get(&url).header(ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let message = error_message(&body)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_else(|| "CMS request failed".to_string());
            tracing::warn!(status = status.as_u16(), error = %message, "cms request rejected");
            return Err(CarouselError::Content(format!("({}) {message}", status.as_u16())));
        }

        let collection: CollectionResponse = response.json()?;
        tracing::debug!(entities = collection.data.len(), "cms collection received");
        Ok(collection)
    }
}

impl ContentSource for HttpContentSource {
    fn list_tours(&self, query: &TourQuery) -> Result<TourPage> {
        let collection = self.get_collection(&format!("/tours{}", query.to_query_string()))?;
        Ok(TourPage {
            tours: tours_from_response(&collection, &self.options),
            pagination: collection.pagination(),
        })
    }

    fn tour_by_slug(&self, slug: &str) -> Result<Option<Tour>> {
        let collection = self.get_collection(&format!("/tours{}", slug_query(slug)))?;
        Ok(tours_from_response(&collection, &self.options).into_iter().next())
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// Extracts a human message from a CMS error body.
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["/error/message", "/error/details/errors/0/message", "/message"]
        .iter()
        .find_map(|pointer| value.pointer(pointer).and_then(Value::as_str))
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
}
