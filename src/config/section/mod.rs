//! Configuration sections of `blogfeed.toml`.
//!
//! | Section        | Type                 |
//! |----------------|----------------------|
//! | `[site.info]`  | [`SiteInfoConfig`]   |
//! | `[feed]`       | [`FeedSectionConfig`]|
//! | `[build]`      | [`BuildSectionConfig`]|
//! | `[serve]`      | [`ServeConfig`]      |

mod build;
mod feed;
mod serve;
mod site;

pub use build::BuildSectionConfig;
pub use feed::FeedSectionConfig;
pub use serve::ServeConfig;
pub use site::{SiteInfoConfig, SiteSectionConfig};
