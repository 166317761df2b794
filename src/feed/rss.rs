//! RSS 2.0 encoding.
//!
//! Items are written in the order given, with absolute links and permalink
//! GUIDs. Dates use RFC 2822 as `<pubDate>` requires.

use super::{
    EncodingError, FeedDocument, FeedEncoder, FeedExtensions, FeedItem, FeedMetadata,
    RSS_CONTENT_TYPE,
};
use rss::validation::Validate;
use rss::{Channel, ChannelBuilder, GuidBuilder, Item, ItemBuilder};
use url::Url;

/// Channel elements accepted as extensions.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "language",
    "copyright",
    "managingEditor",
    "webMaster",
    "generator",
    "ttl",
    "docs",
    "rating",
];

/// Indent width of the non-minified output.
const INDENT: usize = 2;

/// Encoder producing RSS 2.0 documents via the `rss` crate.
#[derive(Debug, Clone)]
pub struct RssEncoder {
    minify: bool,
    generator: Option<String>,
}

impl Default for RssEncoder {
    fn default() -> Self {
        Self {
            minify: false,
            generator: Some(concat!("blogfeed ", env!("CARGO_PKG_VERSION")).to_string()),
        }
    }
}

impl RssEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    /// Set the `<generator>` element, `None` to omit it.
    pub fn with_generator(mut self, generator: Option<String>) -> Self {
        self.generator = generator;
        self
    }

    fn build_channel(
        &self,
        metadata: &FeedMetadata,
        items: &[FeedItem],
        extensions: &FeedExtensions,
    ) -> Result<Channel, EncodingError> {
        let base_url = checked_site_url(&metadata.site_url)?;

        let mut builder = ChannelBuilder::default();
        builder
            .title(metadata.title.clone())
            .link(metadata.site_url.clone())
            .description(metadata.description.clone())
            .generator(self.generator.clone());

        for (name, value) in extensions {
            apply_extension(&mut builder, name, value)?;
        }

        let rss_items: Vec<Item> = items.iter().map(|item| item_to_rss(item, base_url)).collect();
        let channel = builder.items(rss_items).build();

        channel
            .validate()
            .map_err(|e| EncodingError::Invalid(e.to_string()))?;
        Ok(channel)
    }
}

impl FeedEncoder for RssEncoder {
    fn encode(
        &self,
        metadata: &FeedMetadata,
        items: &[FeedItem],
        extensions: &FeedExtensions,
    ) -> Result<FeedDocument, EncodingError> {
        let channel = self.build_channel(metadata, items, extensions)?;
        let body = if self.minify {
            channel.to_string().into_bytes()
        } else {
            channel
                .pretty_write_to(Vec::new(), b' ', INDENT)
                .map_err(|e| EncodingError::Write(e.to_string()))?
        };

        Ok(FeedDocument {
            content_type: RSS_CONTENT_TYPE,
            body,
        })
    }
}

/// Returns the site URL without trailing `/`.
fn checked_site_url(site_url: &str) -> Result<&str, EncodingError> {
    let valid = Url::parse(site_url)
        .is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host());
    if !valid {
        return Err(EncodingError::InvalidSiteUrl(site_url.to_string()));
    }
    Ok(site_url.trim_end_matches('/'))
}

/// Resolve a site-relative link; absolute links pass through.
fn absolute_link(base_url: &str, link: &str) -> String {
    if Url::parse(link).is_ok() {
        return link.to_string();
    }
    if link.starts_with('/') {
        format!("{base_url}{link}")
    } else {
        format!("{base_url}/{link}")
    }
}

fn item_to_rss(item: &FeedItem, base_url: &str) -> Item {
    let link = absolute_link(base_url, &item.link);
    let guid = GuidBuilder::default()
        .value(link.clone())
        .permalink(true)
        .build();

    ItemBuilder::default()
        .title(Some(item.title.clone()))
        .link(Some(link))
        .guid(Some(guid))
        .description(Some(item.description.clone()))
        .pub_date(Some(item.publish_date.to_rfc2822()))
        .build()
}

fn apply_extension(
    builder: &mut ChannelBuilder,
    name: &str,
    value: &str,
) -> Result<(), EncodingError> {
    let value = Some(value.to_string());
    match name {
        "language" => builder.language(value),
        "copyright" => builder.copyright(value),
        "managingEditor" => builder.managing_editor(value),
        "webMaster" => builder.webmaster(value),
        "generator" => builder.generator(value),
        "docs" => builder.docs(value),
        "rating" => builder.rating(value),
        "ttl" => {
            let ttl = value.unwrap_or_default();
            if ttl.parse::<u32>().is_err() {
                return Err(EncodingError::InvalidExtension {
                    name: name.to_string(),
                    value: ttl,
                });
            }
            builder.ttl(Some(ttl))
        }
        _ => return Err(EncodingError::UnsupportedExtension(name.to_string())),
    };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::DateTimeUtc;

    fn metadata() -> FeedMetadata {
        FeedMetadata {
            title: "Kai's Blog".to_string(),
            description: "Thoughts on software engineering, AI, and technology".to_string(),
            site_url: "https://example.com/".to_string(),
        }
    }

    fn item(slug: &str, date: DateTimeUtc) -> FeedItem {
        FeedItem {
            title: format!("Post {slug}"),
            publish_date: date,
            description: format!("About {slug}"),
            link: format!("/blog/{slug}/"),
        }
    }

    fn language_en() -> FeedExtensions {
        FeedExtensions::from([("language".to_string(), "en-us".to_string())])
    }

    fn decode(doc: &FeedDocument) -> Channel {
        Channel::read_from(doc.body.as_slice()).expect("encoded feed should parse")
    }

    #[test]
    fn test_encode_channel_metadata() {
        let doc = RssEncoder::new()
            .encode(&metadata(), &[], &language_en())
            .unwrap();
        assert_eq!(doc.content_type, RSS_CONTENT_TYPE);

        let channel = decode(&doc);
        assert_eq!(channel.title(), "Kai's Blog");
        assert_eq!(channel.link(), "https://example.com/");
        assert_eq!(
            channel.description(),
            "Thoughts on software engineering, AI, and technology"
        );
        assert_eq!(channel.language(), Some("en-us"));
        assert!(channel.generator().unwrap_or_default().starts_with("blogfeed"));
        assert!(channel.items().is_empty());
    }

    #[test]
    fn test_encode_items_in_order() {
        let items = [
            item("b", DateTimeUtc::from_ymd(2024, 1, 1)),
            item("a", DateTimeUtc::from_ymd(2024, 3, 1)),
        ];
        let doc = RssEncoder::new()
            .encode(&metadata(), &items, &language_en())
            .unwrap();
        let channel = decode(&doc);

        let links: Vec<_> = channel.items().iter().filter_map(|i| i.link()).collect();
        assert_eq!(
            links,
            ["https://example.com/blog/b/", "https://example.com/blog/a/"]
        );

        let first = &channel.items()[0];
        assert_eq!(first.title(), Some("Post b"));
        assert_eq!(first.description(), Some("About b"));
        assert_eq!(first.pub_date(), Some("Mon, 01 Jan 2024 00:00:00 GMT"));
        let guid = first.guid().unwrap();
        assert!(guid.is_permalink());
        assert_eq!(guid.value(), "https://example.com/blog/b/");
    }

    #[test]
    fn test_encode_escapes_markup() {
        let mut entry = item("x", DateTimeUtc::from_ymd(2024, 1, 1));
        entry.title = "Tom & Jerry <3".to_string();
        let doc = RssEncoder::new()
            .encode(&metadata(), &[entry], &FeedExtensions::new())
            .unwrap();

        assert!(!doc.as_str().contains("Tom & Jerry <3"));
        assert_eq!(decode(&doc).items()[0].title(), Some("Tom & Jerry <3"));
    }

    #[test]
    fn test_site_url_with_subpath() {
        let meta = FeedMetadata {
            site_url: "https://user.github.io/site".to_string(),
            ..metadata()
        };
        let doc = RssEncoder::new()
            .encode(&meta, &[item("a", DateTimeUtc::from_ymd(2024, 1, 1))], &FeedExtensions::new())
            .unwrap();
        assert_eq!(
            decode(&doc).items()[0].link(),
            Some("https://user.github.io/site/blog/a/")
        );
    }

    #[test]
    fn test_absolute_link_passthrough() {
        assert_eq!(
            absolute_link("https://example.com", "https://other.org/x/"),
            "https://other.org/x/"
        );
        assert_eq!(absolute_link("https://example.com", "/a/"), "https://example.com/a/");
        assert_eq!(absolute_link("https://example.com", "a/"), "https://example.com/a/");
    }

    #[test]
    fn test_invalid_site_url() {
        for url in ["", "example.com", "ftp://example.com", "/relative"] {
            let meta = FeedMetadata {
                site_url: url.to_string(),
                ..metadata()
            };
            let err = RssEncoder::new()
                .encode(&meta, &[], &FeedExtensions::new())
                .unwrap_err();
            assert!(matches!(err, EncodingError::InvalidSiteUrl(_)), "{url}");
        }
    }

    #[test]
    fn test_extensions() {
        let extensions = FeedExtensions::from([
            ("copyright".to_string(), "CC BY 4.0".to_string()),
            ("ttl".to_string(), "60".to_string()),
            ("generator".to_string(), "custom".to_string()),
        ]);
        let doc = RssEncoder::new()
            .encode(&metadata(), &[], &extensions)
            .unwrap();
        let channel = decode(&doc);
        assert_eq!(channel.copyright(), Some("CC BY 4.0"));
        assert_eq!(channel.ttl(), Some("60"));
        assert_eq!(channel.generator(), Some("custom"));
    }

    #[test]
    fn test_extension_errors() {
        let unsupported = FeedExtensions::from([("cloud".to_string(), "x".to_string())]);
        let err = RssEncoder::new()
            .encode(&metadata(), &[], &unsupported)
            .unwrap_err();
        assert!(matches!(err, EncodingError::UnsupportedExtension(name) if name == "cloud"));

        let bad_ttl = FeedExtensions::from([("ttl".to_string(), "soon".to_string())]);
        let err = RssEncoder::new()
            .encode(&metadata(), &[], &bad_ttl)
            .unwrap_err();
        assert!(matches!(err, EncodingError::InvalidExtension { .. }));
    }

    #[test]
    fn test_without_generator() {
        let doc = RssEncoder::new()
            .with_generator(None)
            .encode(&metadata(), &[], &FeedExtensions::new())
            .unwrap();
        assert_eq!(decode(&doc).generator(), None);
    }

    #[test]
    fn test_multiline_text_survives_both_layouts() {
        let mut entry = item("a", DateTimeUtc::from_ymd(2024, 1, 1));
        entry.title = "Part one\nPart two".to_string();
        entry.description = "line one\n    line two".to_string();

        let pretty = RssEncoder::new()
            .encode(&metadata(), &[entry.clone()], &FeedExtensions::new())
            .unwrap();
        let compact = RssEncoder::new()
            .with_minify(true)
            .encode(&metadata(), &[entry], &FeedExtensions::new())
            .unwrap();

        assert!(compact.body.len() < pretty.body.len());
        assert!(pretty.as_str().contains("\n  <channel>"));
        assert!(!compact.as_str().contains("\n  <channel>"));

        for doc in [&pretty, &compact] {
            let channel = decode(doc);
            let decoded = &channel.items()[0];
            assert_eq!(decoded.title(), Some("Part one\nPart two"));
            assert_eq!(decoded.description(), Some("line one\n    line two"));
            assert_eq!(decoded.link(), Some("https://example.com/blog/a/"));
        }
    }

    #[test]
    fn test_encode_is_deterministic() {
        let items = [
            item("a", DateTimeUtc::from_ymd(2024, 1, 1)),
            item("b", DateTimeUtc::from_ymd(2024, 1, 1)),
        ];
        let encoder = RssEncoder::new();
        let first = encoder.encode(&metadata(), &items, &language_en()).unwrap();
        let second = encoder.encode(&metadata(), &items, &language_en()).unwrap();
        assert_eq!(first, second);
    }
}
