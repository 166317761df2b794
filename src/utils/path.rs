//! Path helpers.

use std::path::{Path, PathBuf};

/// Normalize path to absolute form.
///
/// Canonicalizes existing paths. Paths that do not exist yet (such as an
/// output directory before the first build) are joined onto the current
/// directory instead.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}
