//! Entry slugs derived from collection-relative file paths.

use deunicode::deunicode;
use std::path::{Component, Path};

/// Slugify a single path segment.
///
/// Unicode is transliterated to ASCII and lowercased. Whitespace becomes
/// `-`, and other punctuation except `-` and `_` is dropped.
pub fn slugify_segment(segment: &str) -> String {
    deunicode(segment)
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            c if c.is_ascii_alphanumeric() || c == '-' || c == '_' => Some(c),
            c if c.is_whitespace() => Some('-'),
            _ => None,
        })
        .collect()
}

/// Derive the slug of an entry from its path relative to the collection root.
///
/// `hello world.md` → `hello-world`, `2024/intro.md` → `2024/intro`,
/// `series/part-one/index.md` → `series/part-one`.
pub fn slug_from_path(relative: &Path) -> String {
    let mut segments: Vec<String> = relative
        .with_extension("")
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(slugify_segment(&s.to_string_lossy())),
            _ => None,
        })
        .filter(|s| !s.is_empty())
        .collect();

    if segments.len() > 1 && segments.last().is_some_and(|s| s == "index") {
        segments.pop();
    }
    segments.join("/")
}

/// Normalize an explicit `slug` front matter value.
pub fn normalize_explicit(slug: &str) -> String {
    slug.trim().trim_matches('/').to_string()
}
