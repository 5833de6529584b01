//! Content layer: where tours come from.
//!
//! This module turns CMS collection responses into [`Tour`](crate::Tour)
//! records. It knows the CMS query dialect, both entity shapes the CMS has
//! used over time, and how image renditions are laid out.
//!
//! # Modules
//!
//! - `backend`: [`ContentSource`] trait shared by all providers
//! - `http`: Live CMS over HTTP
//! - `file`: Saved CMS response on disk, queried locally
//! - `query`: Listing parameters and their query-string encoding
//! - `models`: Response envelopes and page metadata
//! - `normalize`: Entity to `Tour` mapping with per-field fallbacks
//! - `media`: Image rendition selection and URL resolution

pub mod backend;
pub mod file;
pub mod http;
pub mod media;
pub mod models;
pub mod normalize;
pub mod query;

pub use backend::ContentSource;
pub use file::FileContentSource;
pub use http::HttpContentSource;
pub use media::{media_url, pick_image_url};
pub use models::{CollectionResponse, Pagination, TourPage};
pub use normalize::{entity_attrs, tour_from_entity, tours_from_response, NormalizeOptions};
pub use query::{slug_query, TourQuery, TourSort};

use crate::domain::{CarouselError, Result};
use crate::{Config, SourceKind};

/// Opens the content source selected by `config.content.source`.
///
/// # Errors
///
/// Returns [`CarouselError::Config`] when the file source is selected without
/// a file, and propagates construction errors of the chosen source.
pub fn open_source(config: &Config) -> Result<Box<dyn ContentSource>> {
    match config.content.source {
        SourceKind::Http => Ok(Box::new(HttpContentSource::new(
            &config.cms.base_url,
            config.cms.api_token.as_deref(),
            config.cms_timeout(),
            &config.content.placeholder_image,
        )?)),
        SourceKind::File => {
            let path = config.content.file.as_ref().ok_or_else(|| {
                CarouselError::Config("content.source is 'file' but content.file is not set".to_string())
            })?;
            let options = NormalizeOptions {
                base_url: config.cms.base_url.trim_end_matches('/').to_string(),
                placeholder_image: config.content.placeholder_image.clone(),
            };
            Ok(Box::new(FileContentSource::open(
                crate::infrastructure::expand_tilde(path),
                options,
            )?))
        }
    }
}
