//! `[site.info]` configuration.
//!
//! Channel metadata of the feed.
//!
//! # Example
//!
//! ```toml
//! [site.info]
//! title = "Kai's Blog"
//! description = "Thoughts on software engineering, AI, and technology"
//! url = "https://example.com"
//! language = "en-us"
//! ```

use crate::config::util::validate_http_url;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// `[site]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    pub info: SiteInfoConfig,
}

/// Site metadata used for the feed channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    pub title: String,

    pub description: String,

    /// Deployed site URL. Item links are resolved against it.
    pub url: Option<String>,

    /// Channel `<language>`, empty to omit.
    pub language: String,
}

pub struct SiteInfoFields {
    pub title: FieldPath,
    pub description: FieldPath,
    pub url: FieldPath,
    pub language: FieldPath,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: "Kai's Blog".into(),
            description: "Thoughts on software engineering, AI, and technology".into(),
            url: None,
            language: "en-us".into(),
        }
    }
}

impl SiteInfoConfig {
    pub const FIELDS: SiteInfoFields = SiteInfoFields {
        title: FieldPath::new("site.info.title"),
        description: FieldPath::new("site.info.description"),
        url: FieldPath::new("site.info.url"),
        language: FieldPath::new("site.info.language"),
    };

    /// Validate site metadata.
    ///
    /// # Checks
    /// - `title` is not empty
    /// - `url`, when set, is an absolute http(s) URL
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(Self::FIELDS.title, "feed title must not be empty");
        }
        if let Some(url) = &self.url {
            validate_http_url(Self::FIELDS.url, url, diag);
        }
    }
}
