//! `blogfeed query`: feed items as JSON.

use super::{QueryArgs, common::create_handler};
use crate::{config::SiteConfig, debug, feed::FeedItem};
use anyhow::{Context, Result};
use std::fs;

/// Print the published items in feed order, without encoding them.
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let handler = create_handler(config)?;
    let items = handler.feed_items()?;
    let json = to_json(&items, args.pretty)?;

    match &args.output {
        Some(path) => {
            fs::write(path, json + "\n")
                .with_context(|| format!("Failed to write {}", path.display()))?;
            debug!("query"; "{} items written to {}", items.len(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn to_json(items: &[FeedItem], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(items)?
    } else {
        serde_json::to_string(items)?
    };
    Ok(json)
}
