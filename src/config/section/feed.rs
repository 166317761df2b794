//! `[feed]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [feed]
//! collection = "blog"                       # content collection to publish
//! link = "/blog/{slug}/"                    # item link template
//! path = "rss.xml"                          # output file, relative to build.output
//! route = "/rss.xml"                        # route served by `blogfeed serve`
//! fallback_url = "https://kai-bailey.github.io"
//! minify = false
//!
//! [feed.extensions]
//! copyright = "CC BY 4.0"
//! ttl = "60"
//! ```

use crate::config::util::validate_http_url;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::feed::{LinkTemplate, SUPPORTED_EXTENSIONS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Component, PathBuf};

/// Feed generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSectionConfig {
    /// Content collection the feed lists.
    pub collection: String,

    /// Item link template, must contain `{slug}`.
    pub link: String,

    /// Output file path for `build`, relative to the output directory.
    pub path: PathBuf,

    /// HTTP route for `serve`.
    pub route: String,

    /// Site URL used when none is configured or given on the command line.
    pub fallback_url: Option<String>,

    pub minify: bool,

    /// Extra channel elements (language, copyright, ttl, ...).
    pub extensions: BTreeMap<String, String>,
}

pub struct FeedFields {
    pub collection: FieldPath,
    pub link: FieldPath,
    pub path: FieldPath,
    pub route: FieldPath,
    pub fallback_url: FieldPath,
    pub extensions: FieldPath,
}

impl Default for FeedSectionConfig {
    fn default() -> Self {
        Self {
            collection: "blog".into(),
            link: "/blog/{slug}/".into(),
            path: "rss.xml".into(),
            route: "/rss.xml".into(),
            fallback_url: Some("https://kai-bailey.github.io".into()),
            minify: false,
            extensions: BTreeMap::new(),
        }
    }
}

impl FeedSectionConfig {
    pub const FIELDS: FeedFields = FeedFields {
        collection: FieldPath::new("feed.collection"),
        link: FieldPath::new("feed.link"),
        path: FieldPath::new("feed.path"),
        route: FieldPath::new("feed.route"),
        fallback_url: FieldPath::new("feed.fallback_url"),
        extensions: FieldPath::new("feed.extensions"),
    };

    /// Validate feed settings.
    ///
    /// # Checks
    /// - `collection` is a single path segment
    /// - `link` parses as a [`LinkTemplate`]
    /// - `path` is a relative file path inside the output directory
    /// - `route` starts with `/`
    /// - `fallback_url`, when set, is an absolute http(s) URL
    /// - every extension is a supported channel element
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let collection = self.collection.trim();
        if collection.is_empty() || collection.contains(['/', '\\']) || collection.starts_with('.') {
            diag.error_with_hint(
                Self::FIELDS.collection,
                format!("invalid collection name `{}`", self.collection),
                "use a directory name under the content directory, e.g. \"blog\"",
            );
        }

        if let Err(e) = LinkTemplate::parse(&self.link) {
            diag.error_with_hint(Self::FIELDS.link, e.to_string(), "e.g. \"/blog/{slug}/\"");
        }

        let path_ok = !self.path.as_os_str().is_empty()
            && self.path.components().all(|c| matches!(c, Component::Normal(_)));
        if !path_ok {
            diag.error_with_hint(
                Self::FIELDS.path,
                format!("`{}` must be a relative file path", self.path.display()),
                "e.g. \"rss.xml\"",
            );
        }

        if !self.route.starts_with('/') {
            diag.error_with_hint(
                Self::FIELDS.route,
                format!("route `{}` must start with `/`", self.route),
                "e.g. \"/rss.xml\"",
            );
        }

        if let Some(url) = &self.fallback_url {
            validate_http_url(Self::FIELDS.fallback_url, url, diag);
        }

        for name in self.extensions.keys() {
            if !SUPPORTED_EXTENSIONS.contains(&name.as_str()) {
                diag.error_with_hint(
                    Self::FIELDS.extensions,
                    format!("unsupported channel element `{name}`"),
                    format!("supported: {}", SUPPORTED_EXTENSIONS.join(", ")),
                );
            }
        }
    }
}
