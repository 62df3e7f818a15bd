pub mod scrapers;
pub mod cli;
pub mod feed;
pub mod fetcher;
pub mod logging;
pub mod pipeline;
pub mod report;

pub use cli::{ScraperArgs, handle_command};

pub mod prelude {
    pub use super::feed::FeedReader;
    pub use super::scrapers::TeaserScraper;
    pub use ph_core::{Error, FeedEntry, PageFetcher, Result, TargetConfig, Teaser};
}
