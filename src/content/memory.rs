//! In-memory content store.

use super::{ContentItem, ContentStore, Predicate, StoreError};
use rustc_hash::FxHashMap;

/// Collections held in memory, items kept in insertion order.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    collections: FxHashMap<String, Vec<ContentItem>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a whole collection.
    pub fn with_collection(
        mut self,
        name: impl Into<String>,
        items: impl IntoIterator<Item = ContentItem>,
    ) -> Self {
        self.collections
            .insert(name.into(), items.into_iter().collect());
        self
    }

    /// Append one item, creating the collection if needed.
    pub fn insert(&mut self, collection: &str, item: ContentItem) {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(item);
    }
}

impl ContentStore for MemoryStore {
    fn query(
        &self,
        collection: &str,
        predicate: Predicate,
    ) -> Result<Vec<ContentItem>, StoreError> {
        let items = self
            .collections
            .get(collection)
            .ok_or_else(|| StoreError::CollectionNotFound(collection.to_string()))?;

        Ok(items.iter().filter(|item| predicate(item)).cloned().collect())
    }
}
