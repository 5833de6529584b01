//! Tour domain model.
//!
//! A [`Tour`] is the display record the carousel shows: everything a card
//! needs, already normalized from the CMS payload. Tours are immutable once
//! built; a data refresh replaces the whole list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder shown when a tour has no duration information.
pub const UNKNOWN_DURATION: &str = "—";

/// Rating label shown for tours without reviews.
pub const UNRATED: &str = "—";

/// Price label shown when the CMS carries no price.
pub const DEFAULT_PRICE: &str = "Request Quote";

/// A tour as displayed on a carousel card.
///
/// # Fields
///
/// - `id`: CMS identifier, `0` when the payload carried none
/// - `slug`: URL slug used for the details link
/// - `title`: Display title (may be empty)
/// - `image`: Fully resolved image URL, or the configured placeholder
/// - `duration`: Human duration label such as `"7 days"`
/// - `highlights`: Short highlight chips, in CMS order
/// - `price`: Price label, [`DEFAULT_PRICE`] when absent
/// - `rating`: Average rating, `0.0` when absent
/// - `reviews`: Review count, `0` when absent
/// - `featured`: Whether the tour belongs on the featured carousel
/// - `published_at`: Publication time, used for "newest" ordering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub image: String,
    pub duration: String,
    pub highlights: Vec<String>,
    pub price: String,
    pub rating: f64,
    pub reviews: u32,
    pub featured: bool,
    pub published_at: Option<DateTime<Utc>>,
}

impl Tour {
    /// Creates a tour with the given identity and every other field defaulted.
    ///
    /// # Examples
    ///
    /// ```
    /// use tour_carousel::Tour;
    ///
    /// let tour = Tour::new(7, "serengeti-migration", "Serengeti Migration");
    /// assert_eq!(tour.href(), "/tours/serengeti-migration");
    /// assert_eq!(tour.price, "Request Quote");
    /// assert_eq!(tour.rating_label(), "—");
    /// ```
    #[must_use]
    pub fn new(id: i64, slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            slug: slug.into(),
            title: title.into(),
            image: String::new(),
            duration: UNKNOWN_DURATION.to_string(),
            highlights: Vec::new(),
            price: DEFAULT_PRICE.to_string(),
            rating: 0.0,
            reviews: 0,
            featured: false,
            published_at: None,
        }
    }

    /// Link to the tour's details page.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/tours/{}", self.slug)
    }

    /// Rating with one decimal, or `"—"` for unrated tours.
    #[must_use]
    pub fn rating_label(&self) -> String {
        if self.rating > 0.0 {
            format!("{:.1}", self.rating)
        } else {
            UNRATED.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_label_rounds_or_falls_back_to_unrated() {
        let mut tour = Tour::new(1, "ruaha", "Ruaha");
        assert_eq!(tour.rating_label(), UNRATED);

        tour.rating = 4.76;
        assert_eq!(tour.rating_label(), "4.8");
    }
}
