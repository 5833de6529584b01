//! Offline content source reading a saved CMS response.
//!
//! The file holds the body of a `GET /api/tours?populate=*` call, in either
//! entity shape. Search, sorting and pagination are applied locally with the
//! same semantics the CMS uses, so the carousel behaves identically offline.
//!
//! # Performance Characteristics
//!
//! - **Load**: the whole file is parsed and normalized once, in [`FileContentSource::open`]
//! - **Query**: O(n log n) per listing over the in-memory tours
//! - **Best for**: demos, tests, and sites with a few hundred tours

use crate::content::backend::ContentSource;
use crate::content::models::{CollectionResponse, Pagination, TourPage};
use crate::content::normalize::{tours_from_response, NormalizeOptions};
use crate::content::query::{TourQuery, TourSort};
use crate::domain::{Result, Tour};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// Content source backed by a JSON file.
///
/// # File Format
///
/// ```json
/// {
///   "data": [
///     { "id": 1, "attributes": { "slug": "serengeti", "title": "Serengeti", "featured": true } },
///     { "id": 2, "slug": "zanzibar", "title": "Zanzibar" }
///   ],
///   "meta": { "pagination": { "page": 1, "pageSize": 25, "pageCount": 1, "total": 2 } }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FileContentSource {
    path: PathBuf,
    tours: Vec<Tour>,
}

impl FileContentSource {
    /// Loads and normalizes every tour in `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a collection
    /// response.
    pub fn open(path: impl AsRef<Path>, options: NormalizeOptions) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        tracing::debug!(path = ?path, "loading content file");

        let raw = std::fs::read_to_string(&path)?;
        let collection: CollectionResponse = serde_json::from_str(&raw)?;
        let tours = tours_from_response(&collection, &options);

        tracing::debug!(path = ?path, tours = tours.len(), "content file loaded");
        Ok(Self { path, tours })
    }

    /// Builds a source over already normalized tours.
    #[must_use]
    pub fn from_tours(tours: Vec<Tour>) -> Self {
        Self {
            path: PathBuf::new(),
            tours,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every loaded tour, in file order.
    #[must_use]
    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }
}

impl ContentSource for FileContentSource {
    fn list_tours(&self, query: &TourQuery) -> Result<TourPage> {
        let needle = query.search_term().map(str::to_lowercase);
        let mut matches: Vec<&Tour> = self
            .tours
            .iter()
            .filter(|tour| {
                needle
                    .as_deref()
                    .map_or(true, |n| tour.title.to_lowercase().contains(n))
            })
            .collect();

        matches.sort_by(|a, b| compare(a, b, query.sort));

        let page = query.page.max(1);
        let page_size = query.page_size.max(1);
        let skip = (page as usize - 1).saturating_mul(page_size as usize);

        let tours: Vec<Tour> = matches
            .iter()
            .skip(skip)
            .take(page_size as usize)
            .map(|t| (*t).clone())
            .collect();

        tracing::debug!(
            matched = matches.len(),
            returned = tours.len(),
            page,
            sort = %query.sort,
            "file listing"
        );

        Ok(TourPage {
            tours,
            pagination: Some(Pagination::for_total(page, page_size, matches.len())),
        })
    }

    fn tour_by_slug(&self, slug: &str) -> Result<Option<Tour>> {
        Ok(self.tours.iter().find(|t| t.slug == slug).cloned())
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

fn compare(a: &Tour, b: &Tour, sort: TourSort) -> Ordering {
    // unpublished entries sort after published ones
    let newest = || b.published_at.cmp(&a.published_at);
    match sort {
        TourSort::Newest => newest(),
        TourSort::Rating => b.rating.total_cmp(&a.rating).then_with(newest),
        TourSort::Title => a.title.cmp(&b.title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn tour(id: i64, title: &str, rating: f64, day: Option<u32>) -> Tour {
        let mut t = Tour::new(id, format!("t-{id}"), title);
        t.rating = rating;
        t.published_at = day.map(|d| Utc.with_ymd_and_hms(2024, 5, d, 0, 0, 0).unwrap());
        t
    }

    fn source() -> FileContentSource {
        FileContentSource::from_tours(vec![
            tour(1, "Serengeti Safari", 4.8, Some(1)),
            tour(2, "Zanzibar Beach", 4.8, Some(9)),
            tour(3, "Kilimanjaro Climb", 4.9, None),
            tour(4, "Tarangire Safari", 4.1, Some(5)),
        ])
    }

    fn ids(page: &TourPage) -> Vec<i64> {
        page.tours.iter().map(|t| t.id).collect()
    }

    #[test]
    fn newest_puts_unpublished_last() {
        let page = source().list_tours(&TourQuery::default()).unwrap();
        assert_eq!(ids(&page), vec![2, 4, 1, 3]);
    }

    #[test]
    fn rating_ties_break_on_newest() {
        let query = TourQuery {
            sort: TourSort::Rating,
            ..TourQuery::default()
        };
        assert_eq!(ids(&source().list_tours(&query).unwrap()), vec![3, 2, 1, 4]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let query = TourQuery {
            search: Some("SAFARI".to_string()),
            sort: TourSort::Title,
            ..TourQuery::default()
        };
        assert_eq!(ids(&source().list_tours(&query).unwrap()), vec![1, 4]);
    }

    #[test]
    fn pagination_slices_and_reports_totals() {
        let query = TourQuery {
            sort: TourSort::Title,
            page: 2,
            page_size: 3,
            ..TourQuery::default()
        };
        let page = source().list_tours(&query).unwrap();
        assert_eq!(ids(&page), vec![2]);
        let meta = page.pagination.unwrap();
        assert_eq!((meta.page_count, meta.total), (2, 4));
    }

    #[test]
    fn slug_lookup_misses_cleanly() {
        assert_eq!(source().tour_by_slug("t-3").unwrap().map(|t| t.id), Some(3));
        assert!(source().tour_by_slug("nope").unwrap().is_none());
    }
}
