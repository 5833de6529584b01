//! CMS response envelopes.
//!
//! Entities are kept as raw [`serde_json::Value`]s: the same collection may
//! arrive in the v4 (`{ id, attributes }`) or v5 (`{ id, ...fields }`) shape
//! and individual fields are frequently missing or mistyped, so
//! normalization reads them field by field instead of through a strict struct.

use crate::domain::Tour;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a collection endpoint such as `GET /api/tours`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionResponse {
    #[serde(default)]
    pub data: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Page metadata as reported by the CMS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub page_count: u32,
    pub total: u32,
}

impl Pagination {
    /// Metadata for page `page` of `total` entries split into `page_size` pages.
    #[must_use]
    pub fn for_total(page: u32, page_size: u32, total: usize) -> Self {
        let total = u32::try_from(total).unwrap_or(u32::MAX);
        let page_count = if page_size == 0 {
            0
        } else {
            total.div_ceil(page_size)
        };
        Self {
            page,
            page_size,
            page_count,
            total,
        }
    }
}

/// One page of normalized tours.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TourPage {
    pub tours: Vec<Tour>,
    pub pagination: Option<Pagination>,
}

impl CollectionResponse {
    #[must_use]
    pub fn pagination(&self) -> Option<Pagination> {
        self.meta.as_ref().and_then(|m| m.pagination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_pagination() {
        let body = r#"{"data":[{"id":1}],"meta":{"pagination":{"page":1,"pageSize":24,"pageCount":3,"total":61}}}"#;
        let response: CollectionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(
            response.pagination(),
            Some(Pagination {
                page: 1,
                page_size: 24,
                page_count: 3,
                total: 61
            })
        );
    }

    #[test]
    fn missing_meta_and_data_default() {
        let response: CollectionResponse = serde_json::from_str("{}").unwrap();
        assert!(response.data.is_empty());
        assert!(response.pagination().is_none());
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(Pagination::for_total(1, 24, 49).page_count, 3);
        assert_eq!(Pagination::for_total(1, 24, 0).page_count, 0);
    }
}
