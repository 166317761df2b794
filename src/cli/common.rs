//! Shared helpers for CLI commands.

use crate::config::SiteConfig;
use crate::content::FsContentStore;
use crate::feed::{FeedRequestHandler, RssEncoder};
use anyhow::Result;

/// The handler every command runs: markdown collections on disk, RSS out.
pub type SiteFeedHandler = FeedRequestHandler<FsContentStore, RssEncoder>;

/// Build the feed handler described by the configuration.
pub fn create_handler(config: &SiteConfig) -> Result<SiteFeedHandler> {
    let store = FsContentStore::new(&config.build.content);
    let encoder = RssEncoder::new().with_minify(config.feed.minify);
    let settings = config.feed_settings()?;
    Ok(FeedRequestHandler::new(store, encoder, settings))
}
