//! Mapping of raw CMS entities to [`Tour`] records.
//!
//! Every field is read independently with its own fallback, so one malformed
//! field never costs the whole entity.
//!
//! | field        | source                                             | fallback                 |
//! |--------------|----------------------------------------------------|--------------------------|
//! | `id`         | `entity.id`, then `attributes.id`                  | `0`                      |
//! | `slug`       | `slug`                                             | `""`                     |
//! | `title`      | `title`                                            | `""`                     |
//! | `image`      | `coverImage` (see [`pick_image_url`])              | placeholder image        |
//! | `duration`   | `durationLabel`, then `quickFacts.duration`        | `"—"`                    |
//! | `price`      | `price`                                            | `"Request Quote"`        |
//! | `rating`     | `rating` (number or numeric string)                | `0`                      |
//! | `reviews`    | `reviews` (number or numeric string)               | `0`                      |
//! | `highlights` | `highlights` array, scalars only, empties dropped  | `[]`                     |

use super::media::pick_image_url;
use super::models::CollectionResponse;
use crate::domain::tour::{DEFAULT_PRICE, UNKNOWN_DURATION};
use crate::domain::Tour;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Default image for tours without a usable cover.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/images/fallback-hero.jpg";

/// Inputs normalization needs besides the entity itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// CMS origin used to resolve relative media URLs.
    pub base_url: String,
    /// Image used when an entity has no cover image.
    pub placeholder_image: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

/// Field container of an entity: `attributes` for v4, the entity itself for v5.
#[must_use]
pub fn entity_attrs(entity: &Value) -> &Value {
    match entity.get("attributes") {
        Some(attrs) if attrs.is_object() => attrs,
        _ => entity,
    }
}

/// Builds a [`Tour`] from one CMS entity.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tour_carousel::content::{tour_from_entity, NormalizeOptions};
///
/// let entity = json!({ "id": 4, "attributes": { "slug": "zanzibar", "title": "Zanzibar", "rating": "4.6" } });
/// let tour = tour_from_entity(&entity, &NormalizeOptions::default());
/// assert_eq!(tour.id, 4);
/// assert_eq!(tour.rating, 4.6);
/// assert_eq!(tour.duration, "—");
/// assert_eq!(tour.image, "/images/fallback-hero.jpg");
/// ```
#[must_use]
pub fn tour_from_entity(entity: &Value, options: &NormalizeOptions) -> Tour {
    let attrs = entity_attrs(entity);

    let id = integer(entity.get("id"))
        .or_else(|| integer(attrs.get("id")))
        .unwrap_or(0);

    let image = attrs
        .get("coverImage")
        .and_then(|media| pick_image_url(media, &options.base_url))
        .unwrap_or_else(|| options.placeholder_image.clone());

    let duration = [
        attrs.get("durationLabel"),
        attrs.pointer("/quickFacts/duration"),
    ]
    .into_iter()
    .map(|v| text(v).trim().to_string())
    .find(|s| !s.is_empty())
    .unwrap_or_else(|| UNKNOWN_DURATION.to_string());

    let price = match text(attrs.get("price")).trim() {
        "" => DEFAULT_PRICE.to_string(),
        price => price.to_string(),
    };

    let reviews = number(attrs.get("reviews"));
    let reviews = if reviews > 0.0 {
        // saturating float-to-int cast
        reviews as u32
    } else {
        0
    };

    Tour {
        id,
        slug: text(attrs.get("slug")),
        title: text(attrs.get("title")),
        image,
        duration,
        highlights: highlights(attrs.get("highlights")),
        price,
        rating: number(attrs.get("rating")),
        reviews,
        featured: truthy(attrs.get("featured")),
        published_at: timestamp(attrs.get("publishedAt")),
    }
}

/// Normalizes every entity of a collection response, in order.
#[must_use]
pub fn tours_from_response(response: &CollectionResponse, options: &NormalizeOptions) -> Vec<Tour> {
    response
        .data
        .iter()
        .map(|entity| tour_from_entity(entity, options))
        .collect()
}

/// Scalar rendered as text; absent, null and structured values become `""`.
fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Finite number from a number or numeric string, else `0`.
fn number(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) if s.trim().is_empty() => Some(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Bool(b)) => Some(f64::from(u8::from(*b))),
        _ => None,
    };
    parsed.filter(|n| n.is_finite()).unwrap_or(0.0)
}

fn integer(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

fn highlights(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| text(Some(item)))
        .filter(|s| !s.is_empty())
        .collect()
}

fn timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    let raw = value?.as_str()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options() -> NormalizeOptions {
        NormalizeOptions {
            base_url: "https://cms.example.com".to_string(),
            placeholder_image: "/img/fallback.jpg".to_string(),
        }
    }

    #[test]
    fn v5_entity_reads_fields_from_top_level() {
        let entity = json!({
            "id": 12,
            "slug": "kili-lemosho",
            "title": "Kilimanjaro Lemosho",
            "durationLabel": "  8 days ",
            "price": "$3,450",
            "rating": 4.9,
            "reviews": 127,
            "featured": true,
            "highlights": ["Summit night", "", 3],
            "publishedAt": "2024-11-02T09:30:00.000Z",
            "coverImage": { "url": "/uploads/kili.jpg" }
        });
        let tour = tour_from_entity(&entity, &options());
        assert_eq!(tour.id, 12);
        assert_eq!(tour.duration, "8 days");
        assert_eq!(tour.price, "$3,450");
        assert_eq!(tour.reviews, 127);
        assert!(tour.featured);
        assert_eq!(tour.highlights, vec!["Summit night", "3"]);
        assert_eq!(tour.image, "https://cms.example.com/uploads/kili.jpg");
        assert!(tour.published_at.is_some());
    }

    #[test]
    fn duration_falls_back_to_quick_facts_then_dash() {
        let with_facts = json!({ "id": 1, "durationLabel": " ", "quickFacts": { "duration": "5 days" } });
        assert_eq!(tour_from_entity(&with_facts, &options()).duration, "5 days");

        let bare = json!({ "id": 1, "quickFacts": null });
        assert_eq!(tour_from_entity(&bare, &options()).duration, "—");
    }

    #[test]
    fn malformed_fields_fall_back_independently() {
        let entity = json!({
            "attributes": {
                "id": 9,
                "title": { "en": "nested" },
                "rating": "not a number",
                "reviews": -4,
                "price": "   ",
                "highlights": "Beach",
                "coverImage": { "data": null },
                "publishedAt": "yesterday"
            }
        });
        let tour = tour_from_entity(&entity, &options());
        assert_eq!(tour.id, 9);
        assert_eq!(tour.title, "");
        assert_eq!(tour.rating, 0.0);
        assert_eq!(tour.reviews, 0);
        assert_eq!(tour.price, "Request Quote");
        assert!(tour.highlights.is_empty());
        assert_eq!(tour.image, "/img/fallback.jpg");
        assert!(tour.published_at.is_none());
        assert!(!tour.featured);
    }

    #[test]
    fn featured_flag_uses_truthiness() {
        let featured = |entity| tour_from_entity(&entity, &options()).featured;
        assert!(featured(json!({ "attributes": { "featured": 1 } })));
        assert!(featured(json!({ "featured": "yes" })));
        assert!(!featured(json!({ "featured": null })));
        assert!(!featured(json!({ "featured": "" })));
    }
}
