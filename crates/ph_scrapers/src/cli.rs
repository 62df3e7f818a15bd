use std::io::Write;
use std::time::Duration;
use clap::Args;
use ph_core::config::{DEFAULT_FEED_URL, DEFAULT_SELECTOR, DEFAULT_TIMEOUT_SECS, DEFAULT_URL};
use ph_core::{Result, TargetConfig};
use crate::feed::FeedReader;
use crate::fetcher::HttpFetcher;
use crate::pipeline;
use crate::report::Reporter;
use crate::scrapers::TeaserScraper;

#[derive(Args, Debug, Clone)]
pub struct ScraperArgs {
    /// Page to fetch [default: the heise newsticker, or its Atom feed with --feed]
    #[arg(long)]
    pub url: Option<String>,

    /// Print the entries of an Atom/RSS feed instead of page teasers
    #[arg(long)]
    pub feed: bool,

    /// CSS selector for the teaser elements
    #[arg(long, default_value = DEFAULT_SELECTOR)]
    pub selector: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

impl ScraperArgs {
    pub fn target_url(&self) -> &str {
        match (&self.url, self.feed) {
            (Some(url), _) => url.as_str(),
            (None, true) => DEFAULT_FEED_URL,
            (None, false) => DEFAULT_URL,
        }
    }

    pub fn to_config(&self) -> Result<TargetConfig> {
        Ok(TargetConfig::new(self.target_url())?
            .with_selector(self.selector.clone())
            .with_timeout(Duration::from_secs(self.timeout)))
    }
}

/// Runs the teaser or feed pipeline over HTTP, writing the report to `out`.
/// Returns the number of reported items.
pub async fn handle_command<W: Write>(args: &ScraperArgs, out: W) -> Result<usize> {
    let config = args.to_config()?;
    let fetcher = HttpFetcher::new(config.timeout)?;
    let mut reporter = Reporter::new(out);
    if args.feed {
        let reader = FeedReader::new(Box::new(fetcher), config.url);
        return pipeline::run_feed(&reader, &mut reporter).await;
    }
    let scraper = TeaserScraper::new(Box::new(fetcher), config)?;
    pipeline::run(&scraper, &mut reporter).await
}
