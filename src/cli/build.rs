//! `blogfeed build`: write the feed file.

use super::common::create_handler;
use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Generate the feed once and write it to `<build.output>/<feed.path>`.
pub fn build_feed(config: &SiteConfig) -> Result<PathBuf> {
    let handler = create_handler(config)?;
    let document = handler
        .handle(&config.request_context())
        .context("Failed to generate feed")?;

    let path = config.feed_output_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, &document.body)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log!("rss"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    Ok(path)
}
