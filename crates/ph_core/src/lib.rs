pub mod config;
pub mod error;
pub mod fetch;
pub mod types;

pub use config::TargetConfig;
pub use error::{Error, Result};
pub use fetch::PageFetcher;
pub use types::{FeedEntry, Teaser};
