//! Image URL resolution for CMS media fields.
//!
//! A media field may arrive as a v4 relation
//! `{ "data": { "attributes": { "url", "formats" } } }`, as bare
//! `{ "attributes": { ... } }`, or as a v5 media object `{ "url", "formats" }`.
//! The largest available rendition wins; relative URLs are served from the
//! CMS origin.

use serde_json::Value;

/// Rendition names in order of preference.
pub const IMAGE_FORMAT_PREFERENCE: [&str; 4] = ["large", "medium", "small", "thumbnail"];

/// Resolves a media URL against the CMS origin.
///
/// URLs starting with `http` are returned unchanged, relative ones get the
/// origin prefixed, and empty or missing URLs yield `None`.
///
/// # Examples
///
/// ```
/// use tour_carousel::content::media_url;
///
/// let base = "https://cms.example.com";
/// assert_eq!(media_url(Some("/uploads/a.jpg"), base).as_deref(), Some("https://cms.example.com/uploads/a.jpg"));
/// assert_eq!(media_url(Some("https://cdn.example.com/b.jpg"), base).as_deref(), Some("https://cdn.example.com/b.jpg"));
/// assert_eq!(media_url(Some(""), base), None);
/// ```
#[must_use]
pub fn media_url(url: Option<&str>, base: &str) -> Option<String> {
    let url = url.filter(|u| !u.is_empty())?;
    if url.starts_with("http") {
        Some(url.to_string())
    } else {
        Some(format!("{}{url}", base.trim_end_matches('/')))
    }
}

/// Picks the preferred image URL from a media field.
///
/// Returns `None` when the field holds no usable URL; callers substitute
/// their placeholder image.
#[must_use]
pub fn pick_image_url(media: &Value, base: &str) -> Option<String> {
    let attrs = media
        .pointer("/data/attributes")
        .or_else(|| media.get("attributes"))
        .filter(|a| a.is_object());

    let formats = attrs
        .and_then(|a| a.get("formats"))
        .filter(|f| f.is_object())
        .or_else(|| media.get("formats").filter(|f| f.is_object()));

    let original = attrs
        .and_then(|a| non_empty_str(a.get("url")))
        .or_else(|| non_empty_str(media.get("url")));

    let preferred = formats
        .and_then(|formats| {
            IMAGE_FORMAT_PREFERENCE
                .iter()
                .find_map(|tier| non_empty_str(formats.get(*tier).and_then(|r| r.get("url"))))
        })
        .or(original);

    media_url(preferred, base)
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const BASE: &str = "http://localhost:1337";

    #[test]
    fn v4_relation_prefers_large_rendition() {
        let media = json!({
            "data": { "attributes": {
                "url": "/uploads/full.jpg",
                "formats": {
                    "small": { "url": "/uploads/small.jpg" },
                    "large": { "url": "/uploads/large.jpg" }
                }
            }}
        });
        assert_eq!(
            pick_image_url(&media, BASE).as_deref(),
            Some("http://localhost:1337/uploads/large.jpg")
        );
    }

    #[test]
    fn v5_object_falls_through_tiers() {
        let media = json!({
            "url": "/uploads/full.jpg",
            "formats": { "thumbnail": { "url": "/uploads/thumb.jpg" } }
        });
        assert_eq!(
            pick_image_url(&media, BASE).as_deref(),
            Some("http://localhost:1337/uploads/thumb.jpg")
        );
    }

    #[test]
    fn original_url_used_without_formats() {
        let media = json!({ "attributes": { "url": "https://cdn.example.com/x.png" } });
        assert_eq!(
            pick_image_url(&media, BASE).as_deref(),
            Some("https://cdn.example.com/x.png")
        );
    }

    #[test]
    fn missing_media_yields_none() {
        assert_eq!(pick_image_url(&Value::Null, BASE), None);
        assert_eq!(pick_image_url(&json!({ "data": null }), BASE), None);
        assert_eq!(pick_image_url(&json!({ "url": "" }), BASE), None);
    }
}
