//! Content loader executing [`LoadRequest`]s against a content source.
//!
//! The loader is the only place where content-layer errors meet the
//! carousel. Every failure is logged and turned into
//! [`LoadResponse::Error`]; nothing escapes as a panic or a `Result`.
//!
//! Requests can be handled inline with [`ContentLoader::handle_request`] or
//! on a background thread via [`ContentLoader::spawn`], which keeps slow CMS
//! round-trips off the host loop.

use crate::content::{open_source, ContentSource, TourQuery};
use crate::domain::{CarouselError, Result};
use crate::loader::{LoadRequest, LoadResponse};
use crate::Config;
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Executes load requests against a [`ContentSource`].
pub struct ContentLoader {
    source: Box<dyn ContentSource>,
}

impl ContentLoader {
    #[must_use]
    pub fn new(source: Box<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// Creates a loader over the source selected in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured source cannot be opened.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(open_source(config)?))
    }

    /// Helper for handling content results with consistent logging.
    fn handle_result<T, F>(operation: &str, result: Result<T>, on_success: F) -> LoadResponse
    where
        F: FnOnce(T) -> LoadResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "content operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(operation = operation, error = %e, "content operation failed");
                let message = match e {
                    CarouselError::Content(message) => message,
                    other => other.to_string(),
                };
                LoadResponse::Error { message }
            }
        }
    }

    /// Handles `FeaturedTours`.
    ///
    /// Fetches the newest `page_size` tours and keeps the featured ones, in
    /// order.
    fn handle_featured(&self, page_size: usize) -> LoadResponse {
        let query = TourQuery::newest(u32::try_from(page_size).unwrap_or(u32::MAX));

        Self::handle_result("featured tours", self.source.list_tours(&query), |page| {
            let fetched = page.tours.len();
            let tours: Vec<_> = page.tours.into_iter().filter(|t| t.featured).collect();
            tracing::debug!(fetched, featured = tours.len(), "featured tours selected");
            LoadResponse::ToursLoaded { tours }
        })
    }

    /// Handles `TourBySlug`.
    fn handle_tour_by_slug(&self, slug: &str) -> LoadResponse {
        Self::handle_result("tour by slug", self.source.tour_by_slug(slug), |tour| {
            tracing::debug!(slug = %slug, found = tour.is_some(), "tour lookup finished");
            LoadResponse::TourLoaded { tour }
        })
    }

    /// Processes a request and returns its response.
    pub fn handle_request(&self, request: &LoadRequest) -> LoadResponse {
        let _span = tracing::debug_span!("loader_handle_request", request_type = ?request, source = self.source.name()).entered();

        match request {
            LoadRequest::FeaturedTours { page_size } => self.handle_featured(*page_size),
            LoadRequest::TourBySlug { slug } => self.handle_tour_by_slug(slug),
        }
    }

    /// Moves the loader onto a background thread.
    ///
    /// Requests are handled one at a time in arrival order. The thread exits
    /// when the returned handle is dropped.
    #[must_use]
    pub fn spawn(self) -> LoaderHandle {
        let (request_tx, request_rx) = unbounded::<LoaderMsg>();
        let (response_tx, response_rx) = unbounded::<LoadResponse>();

        let thread = thread::spawn(move || {
            while let Ok(msg) = request_rx.recv() {
                match msg {
                    LoaderMsg::Quit => break,
                    LoaderMsg::Load(request) => {
                        let response = self.handle_request(&request);
                        if response_tx.send(response).is_err() {
                            break;
                        }
                    }
                }
            }
            tracing::debug!("loader thread stopped");
        });

        LoaderHandle {
            requests: request_tx,
            responses: response_rx,
            thread: Some(thread),
        }
    }
}

enum LoaderMsg {
    Load(LoadRequest),
    Quit,
}

/// Host-side end of a loader thread.
pub struct LoaderHandle {
    requests: Sender<LoaderMsg>,
    responses: Receiver<LoadResponse>,
    thread: Option<JoinHandle<()>>,
}

impl LoaderHandle {
    /// Queues a request.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::Loader`] if the loader thread has stopped.
    pub fn send(&self, request: LoadRequest) -> Result<()> {
        self.requests
            .send(LoaderMsg::Load(request))
            .map_err(|_| CarouselError::Loader("loader thread is not running".to_string()))
    }

    /// Returns a finished response without blocking.
    #[must_use]
    pub fn try_recv(&self) -> Option<LoadResponse> {
        self.responses.try_recv().ok()
    }

    /// Waits up to `timeout` for the next response.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::Loader`] if the loader thread has stopped.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<LoadResponse>> {
        match self.responses.recv_timeout(timeout) {
            Ok(response) => Ok(Some(response)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => {
                Err(CarouselError::Loader("loader thread is not running".to_string()))
            }
        }
    }
}

impl Drop for LoaderHandle {
    fn drop(&mut self) {
        let _ = self.requests.send(LoaderMsg::Quit);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FileContentSource;
    use crate::domain::Tour;

    fn tour(id: i64, featured: bool) -> Tour {
        let mut t = Tour::new(id, format!("t-{id}"), format!("Tour {id}"));
        t.featured = featured;
        t
    }

    struct FailingSource;

    impl ContentSource for FailingSource {
        fn list_tours(&self, _query: &TourQuery) -> Result<crate::content::TourPage> {
            Err(CarouselError::Content("(503) Service Unavailable".to_string()))
        }

        fn tour_by_slug(&self, _slug: &str) -> Result<Option<Tour>> {
            Err(CarouselError::Config("boom".to_string()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn featured_request_keeps_only_featured_tours() {
        let source = FileContentSource::from_tours(vec![tour(1, true), tour(2, false), tour(3, true)]);
        let loader = ContentLoader::new(Box::new(source));
        let LoadResponse::ToursLoaded { tours } = loader.handle_request(&LoadRequest::featured(200)) else {
            panic!("expected tours");
        };
        assert_eq!(tours.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn content_errors_keep_their_message() {
        let loader = ContentLoader::new(Box::new(FailingSource));
        assert_eq!(
            loader.handle_request(&LoadRequest::featured(200)),
            LoadResponse::Error {
                message: "(503) Service Unavailable".to_string()
            }
        );
        assert_eq!(
            loader.handle_request(&LoadRequest::tour_by_slug("x")),
            LoadResponse::Error {
                message: "Configuration error: boom".to_string()
            }
        );
    }

    #[test]
    fn spawned_loader_answers_in_order() {
        let source = FileContentSource::from_tours(vec![tour(1, true)]);
        let handle = ContentLoader::new(Box::new(source)).spawn();
        handle.send(LoadRequest::tour_by_slug("t-1")).unwrap();
        handle.send(LoadRequest::tour_by_slug("missing")).unwrap();

        let first = handle.recv_timeout(Duration::from_secs(5)).unwrap();
        let second = handle.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(matches!(first, Some(LoadResponse::TourLoaded { tour: Some(_) })));
        assert_eq!(second, Some(LoadResponse::TourLoaded { tour: None }));
    }
}
