use std::io::Write;
use ph_core::Result;
use crate::feed::FeedReader;
use crate::report::Reporter;
use crate::scrapers::TeaserScraper;

/// Announce, fetch, select and report once. Returns the number of teasers.
///
/// Nothing past the announcement is written when the fetch fails.
pub async fn run<W: Write>(scraper: &TeaserScraper, reporter: &mut Reporter<W>) -> Result<usize> {
    reporter.announce(&scraper.config().url)?;
    let teasers = scraper.get_teasers().await?;
    reporter.report(&teasers)?;
    Ok(teasers.len())
}

/// Fetch a feed and print one dated line per entry. No header is written.
pub async fn run_feed<W: Write>(reader: &FeedReader, reporter: &mut Reporter<W>) -> Result<usize> {
    let entries = reader.get_entries().await?;
    reporter.report_feed(&entries)?;
    Ok(entries.len())
}
