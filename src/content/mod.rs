//! Content collections the feed is built from.
//!
//! A collection is a named set of [`ContentItem`]s (one per blog post).
//! Stores are read-only from the feed's point of view: every query returns
//! a fresh snapshot and never mutates the store.
//!
//! | Store             | Backing                                      |
//! |-------------------|----------------------------------------------|
//! | [`FsContentStore`]| Markdown files under `content/<collection>/` |
//! | [`MemoryStore`]   | In-memory vectors (tests, embedding)         |

mod error;
mod frontmatter;
mod fs;
mod memory;
mod slug;

pub use error::StoreError;
pub use fs::FsContentStore;
pub use memory::MemoryStore;

use crate::utils::date::DateTimeUtc;
use serde::Serialize;

/// One blog post as read from a content collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentItem {
    pub title: String,
    pub description: String,
    pub publish_date: DateTimeUtc,
    /// Unique within its collection, used to build the post URL.
    pub slug: String,
    pub draft: bool,
}

/// Selection criterion applied by [`ContentStore::query`].
pub type Predicate = fn(&ContentItem) -> bool;

/// Select only items that are not drafts.
pub fn is_published(item: &ContentItem) -> bool {
    !item.draft
}

/// Read access to content collections.
///
/// Implementations must be deterministic: the same store state yields the
/// same items in the same order.
pub trait ContentStore: Send + Sync {
    /// Return the items of `collection` for which `predicate` holds.
    fn query(&self, collection: &str, predicate: Predicate)
    -> Result<Vec<ContentItem>, StoreError>;
}

#[cfg(test)]
pub(crate) fn test_item(slug: &str, date: &str, draft: bool) -> ContentItem {
    ContentItem {
        title: format!("Post {slug}"),
        description: format!("About {slug}"),
        publish_date: DateTimeUtc::parse(date).expect("valid test date"),
        slug: slug.to_string(),
        draft,
    }
}
