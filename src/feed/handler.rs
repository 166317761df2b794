//! Feed request handling.
//!
//! [`FeedRequestHandler`] owns everything one feed request needs: the
//! content store, the encoder, and the feed settings. Each call to
//! [`FeedRequestHandler::handle`] is independent and shares no mutable
//! state, so a handler can serve concurrent requests through an `Arc`.

use super::link::LinkTemplate;
use super::{FeedDocument, FeedEncoder, FeedError, FeedExtensions, FeedItem, FeedMetadata};
use crate::content::{ContentItem, ContentStore, is_published};
use crate::debug;
use url::Url;

/// Per-request input supplied by the hosting environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Deployed site address, if known.
    pub site: Option<String>,
}

impl RequestContext {
    pub fn new(site: Option<String>) -> Self {
        Self { site }
    }
}

/// Channel metadata and collection settings of a feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSettings {
    pub title: String,
    pub description: String,
    /// Used when the request carries no site address.
    pub fallback_site_url: Option<String>,
    pub collection: String,
    pub link: LinkTemplate,
    pub extensions: FeedExtensions,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            title: "Kai's Blog".to_string(),
            description: "Thoughts on software engineering, AI, and technology".to_string(),
            fallback_site_url: Some("https://kai-bailey.github.io".to_string()),
            collection: "blog".to_string(),
            link: LinkTemplate::default(),
            extensions: FeedExtensions::from([("language".to_string(), "en-us".to_string())]),
        }
    }
}

/// Produces the feed document of a content collection.
#[derive(Debug)]
pub struct FeedRequestHandler<S, E> {
    store: S,
    encoder: E,
    settings: FeedSettings,
}

impl<S: ContentStore, E: FeedEncoder> FeedRequestHandler<S, E> {
    pub fn new(store: S, encoder: E, settings: FeedSettings) -> Self {
        Self {
            store,
            encoder,
            settings,
        }
    }

    pub fn settings(&self) -> &FeedSettings {
        &self.settings
    }

    /// Build the feed for one request.
    ///
    /// The encoder's document is returned as is. Store and encoder failures
    /// propagate unchanged.
    pub fn handle(&self, ctx: &RequestContext) -> Result<FeedDocument, FeedError> {
        let site_url = resolve_site_url(
            ctx.site.as_deref(),
            self.settings.fallback_site_url.as_deref(),
        )?;
        let items = self.feed_items()?;

        let metadata = FeedMetadata {
            title: self.settings.title.clone(),
            description: self.settings.description.clone(),
            site_url,
        };

        debug!("feed"; "encoding {} items for {}", items.len(), metadata.site_url);
        Ok(self
            .encoder
            .encode(&metadata, &items, &self.settings.extensions)?)
    }

    /// Published items of the collection in feed order, not yet encoded.
    pub fn feed_items(&self) -> Result<Vec<FeedItem>, FeedError> {
        let mut posts = self.store.query(&self.settings.collection, is_published)?;
        sort_newest_first(&mut posts);

        Ok(posts
            .into_iter()
            .map(|post| FeedItem {
                link: self.settings.link.render(&post.slug),
                title: post.title,
                publish_date: post.publish_date,
                description: post.description,
            })
            .collect())
    }
}

/// Stable sort: posts with equal dates keep their store order.
fn sort_newest_first(posts: &mut [ContentItem]) {
    posts.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));
}

/// Pick the request's site address, falling back to the configured one.
pub fn resolve_site_url(site: Option<&str>, fallback: Option<&str>) -> Result<String, FeedError> {
    let url = site
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or(fallback)
        .ok_or_else(|| {
            FeedError::Configuration("no site url in request and no fallback configured".into())
        })?;

    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.has_host() => {
            Ok(url.to_string())
        }
        _ => Err(FeedError::Configuration(format!(
            "site url `{url}` is not an absolute http(s) URL"
        ))),
    }
}
