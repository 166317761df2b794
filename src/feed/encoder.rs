use super::{EncodingError, FeedDocument, FeedExtensions, FeedItem, FeedMetadata};

/// Serializes channel metadata and ordered items into a feed document.
///
/// Items must be emitted in the order given.
pub trait FeedEncoder: Send + Sync {
    fn encode(
        &self,
        metadata: &FeedMetadata,
        items: &[FeedItem],
        extensions: &FeedExtensions,
    ) -> Result<FeedDocument, EncodingError>;
}
