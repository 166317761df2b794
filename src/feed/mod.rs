//! RSS feed generation.
//!
//! The pipeline for one request:
//!
//! ```text
//! RequestContext ─► FeedRequestHandler ─► ContentStore::query(is_published)
//!                          │
//!                          ├─ sort by publish date, newest first
//!                          ├─ ContentItem ─► FeedItem (LinkTemplate)
//!                          ▼
//!                    FeedEncoder::encode ─► FeedDocument
//! ```

mod encoder;
mod error;
mod handler;
mod link;
mod rss;

pub use self::rss::{RssEncoder, SUPPORTED_EXTENSIONS};
pub use encoder::FeedEncoder;
pub use error::{EncodingError, FeedError};
pub use handler::{FeedRequestHandler, FeedSettings, RequestContext};
pub use link::{LinkTemplate, LinkTemplateError};

use crate::utils::date::DateTimeUtc;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// MIME type of an RSS 2.0 document.
pub const RSS_CONTENT_TYPE: &str = "application/rss+xml";

/// One entry of the encoded feed. `link` is site-relative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedItem {
    pub title: String,
    pub publish_date: DateTimeUtc,
    pub description: String,
    pub link: String,
}

/// Channel-level metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedMetadata {
    pub title: String,
    pub description: String,
    /// Absolute base address used to resolve item links.
    pub site_url: String,
}

/// Extra channel elements by name, e.g. `language` → `en-us`.
pub type FeedExtensions = BTreeMap<String, String>;

/// A serialized feed ready to be written or served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedDocument {
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl FeedDocument {
    pub fn as_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}
