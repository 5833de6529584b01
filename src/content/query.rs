//! Collection query building in the CMS's bracket notation.
//!
//! Queries follow the `qs` library's values-only style: keys keep their
//! literal brackets, values are percent-encoded with spaces as `%20`, and
//! array entries are indexed. Unlike `qs`, `*` is sent unescaped.
//!
//! ```text
//! ?sort[0]=publishedAt%3Adesc&populate=*&pagination[page]=1&pagination[pageSize]=24
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::form_urlencoded::byte_serialize;

/// Default page size for tour listings.
pub const DEFAULT_PAGE_SIZE: u32 = 24;

/// Ordering of a tour listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TourSort {
    /// Most recently published first.
    #[default]
    Newest,
    /// Highest rating first, newest first among equal ratings.
    Rating,
    /// Alphabetical by title.
    Title,
}

impl TourSort {
    /// Sort expressions sent to the CMS, in priority order.
    #[must_use]
    pub const fn fields(self) -> &'static [&'static str] {
        match self {
            Self::Newest => &["publishedAt:desc"],
            Self::Rating => &["rating:desc", "publishedAt:desc"],
            Self::Title => &["title:asc"],
        }
    }
}

impl fmt::Display for TourSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Newest => "newest",
            Self::Rating => "rating",
            Self::Title => "title",
        };
        f.write_str(name)
    }
}

impl FromStr for TourSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "rating" => Ok(Self::Rating),
            "title" => Ok(Self::Title),
            other => Err(format!("unknown sort '{other}'")),
        }
    }
}

/// Parameters of a tour listing request.
///
/// # Examples
///
/// ```
/// use tour_carousel::content::{TourQuery, TourSort};
///
/// let query = TourQuery {
///     search: Some("safari".to_string()),
///     sort: TourSort::Rating,
///     ..TourQuery::default()
/// };
/// assert_eq!(
///     query.to_query_string(),
///     "?sort[0]=rating%3Adesc&sort[1]=publishedAt%3Adesc&populate=*\
///      &filters[title][$containsi]=safari&pagination[page]=1&pagination[pageSize]=24"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourQuery {
    /// Case-insensitive title substring. Empty means no filter.
    pub search: Option<String>,
    pub sort: TourSort,
    /// 1-based page number.
    pub page: u32,
    pub page_size: u32,
}

impl Default for TourQuery {
    fn default() -> Self {
        Self {
            search: None,
            sort: TourSort::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TourQuery {
    /// Newest-first listing of one page with the given size.
    #[must_use]
    pub fn newest(page_size: u32) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    /// The search term, if it is non-empty.
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    /// Key/value pairs in the order they are sent.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .sort
            .fields()
            .iter()
            .enumerate()
            .map(|(i, field)| (format!("sort[{i}]"), (*field).to_string()))
            .collect();

        pairs.push(("populate".to_string(), "*".to_string()));

        if let Some(search) = self.search_term() {
            pairs.push(("filters[title][$containsi]".to_string(), search.to_string()));
        }

        pairs.push(("pagination[page]".to_string(), self.page.to_string()));
        pairs.push(("pagination[pageSize]".to_string(), self.page_size.to_string()));
        pairs
    }

    /// Renders the query string, leading `?` included.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        encode_pairs(&self.to_pairs())
    }
}

/// Query string selecting the single tour with `slug`.
#[must_use]
pub fn slug_query(slug: &str) -> String {
    encode_pairs(&[
        ("populate".to_string(), "*".to_string()),
        ("filters[slug][$eq]".to_string(), slug.to_string()),
        ("pagination[page]".to_string(), "1".to_string()),
        ("pagination[pageSize]".to_string(), "1".to_string()),
    ])
}

fn encode_pairs(pairs: &[(String, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let body = pairs
        .iter()
        .map(|(key, value)| {
            // form encoding writes spaces as '+' and a literal '+' as %2B
            let encoded = byte_serialize(value.as_bytes()).collect::<String>().replace('+', "%20");
            format!("{key}={encoded}")
        })
        .collect::<Vec<_>>()
        .join("&");
    format!("?{body}")
}
