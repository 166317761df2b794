//! Feed error types.

use crate::content::StoreError;
use thiserror::Error;

/// Failure of a single feed request.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("feed configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

/// Errors raised while serializing a feed.
#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("unsupported feed extension `{0}`")]
    UnsupportedExtension(String),

    #[error("invalid value `{value}` for feed extension `{name}`")]
    InvalidExtension { name: String, value: String },

    #[error("site url `{0}` is not an absolute http(s) URL")]
    InvalidSiteUrl(String),

    #[error("RSS validation failed: {0}")]
    Invalid(String),

    #[error("failed to write feed: {0}")]
    Write(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_is_transparent() {
        let err: FeedError = StoreError::CollectionNotFound("blog".into()).into();
        assert!(matches!(err, FeedError::Store(_)));
        assert_eq!(err.to_string(), "content collection `blog` not found");
    }

    #[test]
    fn test_encoding_error_conversion() {
        let err: FeedError = EncodingError::UnsupportedExtension("foo".into()).into();
        assert!(matches!(err, FeedError::Encoding(_)));
        assert!(err.to_string().contains("`foo`"));
    }
}
