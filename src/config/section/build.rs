//! `[build]` section configuration.
//!
//! ```toml
//! [build]
//! content = "content"   # content collections root
//! output = "dist"       # where `blogfeed build` writes the feed
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Build paths, relative to the project root until normalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    pub content: PathBuf,
    pub output: PathBuf,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            output: "dist".into(),
        }
    }
}
