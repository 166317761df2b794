//! Site-relative post links built from a path template.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const SLUG_PLACEHOLDER: &str = "{slug}";

/// Default template for blog posts.
pub const DEFAULT_LINK_TEMPLATE: &str = "/blog/{slug}/";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkTemplateError {
    #[error("link template must contain `{{slug}}` exactly once")]
    Placeholder,
    #[error("link template must start with `/`")]
    NotRootRelative,
}

/// A root-relative path with a single `{slug}` placeholder.
///
/// Rendered links always start and end with exactly one `/` and never
/// contain empty segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTemplate(String);

impl LinkTemplate {
    pub fn parse(template: &str) -> Result<Self, LinkTemplateError> {
        let template = template.trim();
        if template.matches(SLUG_PLACEHOLDER).count() != 1 {
            return Err(LinkTemplateError::Placeholder);
        }
        if !template.starts_with('/') {
            return Err(LinkTemplateError::NotRootRelative);
        }
        Ok(Self(template.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render the link of a post. Leading and trailing `/` of the slug are
    /// dropped before substitution.
    pub fn render(&self, slug: &str) -> String {
        let raw = self.0.replace(SLUG_PLACEHOLDER, slug.trim_matches('/'));

        let mut link = String::with_capacity(raw.len() + 2);
        link.push('/');
        for segment in raw.split('/').filter(|s| !s.is_empty()) {
            link.push_str(segment);
            link.push('/');
        }
        link
    }
}

impl Default for LinkTemplate {
    fn default() -> Self {
        Self(DEFAULT_LINK_TEMPLATE.to_string())
    }
}

impl FromStr for LinkTemplate {
    type Err = LinkTemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LinkTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
