//! Content source abstraction.
//!
//! This module defines the [`ContentSource`] trait that abstracts over where
//! tours come from. The carousel and the loader only ever see this trait, so
//! the live CMS and an offline dump are interchangeable.
//!
//! The trait is minimal and focused on the operations the site actually
//! performs: a paged, sorted, searchable listing and a lookup by slug.

use crate::content::models::TourPage;
use crate::content::query::TourQuery;
use crate::domain::{Result, Tour};

/// Abstraction over tour providers.
///
/// # Implementations
///
/// - [`HttpContentSource`](crate::content::HttpContentSource): live CMS over HTTP
/// - [`FileContentSource`](crate::content::FileContentSource): saved CMS response on disk
///
/// # Examples
///
/// ```no_run
/// use tour_carousel::content::{ContentSource, FileContentSource, TourQuery};
///
/// let source = FileContentSource::open("fixtures/tours.json", Default::default())?;
/// let page = source.list_tours(&TourQuery::default())?;
/// println!("{} tours", page.tours.len());
/// # Ok::<(), tour_carousel::CarouselError>(())
/// ```
pub trait ContentSource: Send {
    /// Lists one page of tours.
    ///
    /// Tours are normalized and returned in the order requested by
    /// `query.sort`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be reached or answers with
    /// something other than a collection.
    fn list_tours(&self, query: &TourQuery) -> Result<TourPage>;

    /// Looks up a single tour by its slug.
    ///
    /// Returns `Ok(None)` if no tour has that slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup itself fails.
    fn tour_by_slug(&self, slug: &str) -> Result<Option<Tour>>;

    /// Short label for logs.
    fn name(&self) -> &'static str;
}
