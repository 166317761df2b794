//! Filesystem-backed content collections.
//!
//! Layout: `<root>/<collection>/**/*.md`, one post per file. Files and
//! directories whose name starts with `_` or `.` are ignored.

use super::frontmatter::FrontMatter;
use super::slug::{normalize_explicit, slug_from_path};
use super::{ContentItem, ContentStore, Predicate, StoreError};
use crate::debug;
use crate::utils::date::DateTimeUtc;
use jwalk::WalkDir;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// File extensions recognized as content entries.
const CONTENT_EXTENSIONS: &[&str] = &["md", "markdown", "mdx"];

/// Accepted front matter keys for the publish date (lowercased).
const DATE_KEYS: &[&str] = &["date", "pubdate", "pub_date"];

/// Content store reading markdown front matter from disk.
#[derive(Debug, Clone)]
pub struct FsContentStore {
    root: PathBuf,
}

impl FsContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All entry files of a collection directory, sorted by path.
    ///
    /// Walk errors fail the query, except inside ignored directories.
    fn collect_entries(dir: &Path) -> Result<Vec<PathBuf>, StoreError> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map_or_else(|| dir.to_path_buf(), Path::to_path_buf);
                    if is_ignored(dir, &path) {
                        continue;
                    }
                    return Err(StoreError::Io(path, e.into()));
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if has_content_extension(&path) && !is_ignored(dir, &path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

impl ContentStore for FsContentStore {
    fn query(
        &self,
        collection: &str,
        predicate: Predicate,
    ) -> Result<Vec<ContentItem>, StoreError> {
        let dir = self.root.join(collection);
        if !dir.is_dir() {
            debug!("store"; "no collection directory at {}", dir.display());
            return Err(StoreError::CollectionNotFound(collection.to_string()));
        }

        let files = Self::collect_entries(&dir)?;
        let mut seen = FxHashSet::default();
        let mut items = Vec::with_capacity(files.len());

        for path in &files {
            let item = load_entry(&dir, path)?;
            if !seen.insert(item.slug.clone()) {
                return Err(StoreError::malformed(
                    path,
                    format!("duplicate slug `{}`", item.slug),
                ));
            }
            if predicate(&item) {
                items.push(item);
            }
        }

        debug!("store"; "{collection}: {} entries, {} selected", files.len(), items.len());
        Ok(items)
    }
}

fn has_content_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CONTENT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Whether any component below `dir` starts with `_` or `.`.
fn is_ignored(dir: &Path, path: &Path) -> bool {
    path.strip_prefix(dir).is_ok_and(|rel| {
        rel.components().any(|c| match c {
            Component::Normal(name) => name.to_str().is_some_and(|n| n.starts_with(['_', '.'])),
            _ => false,
        })
    })
}

fn load_entry(dir: &Path, path: &Path) -> Result<ContentItem, StoreError> {
    let content = fs::read_to_string(path).map_err(|e| StoreError::Io(path.to_path_buf(), e))?;

    let fm = FrontMatter::extract(&content)
        .map_err(|reason| StoreError::malformed(path, reason))?
        .ok_or_else(|| StoreError::malformed(path, "missing front matter"))?;

    let required = |key: &str| {
        fm.get(key)
            .map(str::to_string)
            .ok_or_else(|| StoreError::malformed(path, format!("missing `{key}`")))
    };

    let title = required("title")?;
    if title.trim().is_empty() {
        return Err(StoreError::malformed(path, "empty `title`"));
    }
    let description = required("description")?;

    let raw_date = fm
        .get_any(DATE_KEYS)
        .ok_or_else(|| StoreError::malformed(path, "missing `date`"))?;
    let publish_date = DateTimeUtc::parse(raw_date)
        .ok_or_else(|| StoreError::malformed(path, format!("invalid date `{raw_date}`")))?;

    let draft = match fm.get("draft") {
        None => false,
        Some(v) if v.eq_ignore_ascii_case("true") => true,
        Some(v) if v.eq_ignore_ascii_case("false") => false,
        Some(v) => {
            return Err(StoreError::malformed(path, format!("invalid `draft` value `{v}`")));
        }
    };

    let slug = match fm.get("slug") {
        Some(explicit) => normalize_explicit(explicit),
        None => slug_from_path(path.strip_prefix(dir).unwrap_or(path)),
    };
    if slug.is_empty() {
        return Err(StoreError::malformed(path, "empty slug"));
    }

    Ok(ContentItem {
        title,
        description,
        publish_date,
        slug,
        draft,
    })
}
