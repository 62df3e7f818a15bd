use std::io::Write;
use ph_core::{FeedEntry, Result, Teaser};
use url::Url;

/// Formats the report body: a blank line, the count, then one bullet per teaser.
pub fn format_report(teasers: &[Teaser]) -> Vec<String> {
    let mut lines = Vec::with_capacity(teasers.len() + 2);
    lines.push(String::new());
    lines.push(format!("News: {}", teasers.len()));
    lines.extend(teasers.iter().map(|t| format!("* {}", t.text)));
    lines
}

/// One `* [YYYY-MM-DD HH:MM:SS]: title` line per entry, times in UTC.
pub fn format_feed(entries: &[FeedEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| {
            let stamp = entry
                .published
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| "unknown".to_string());
            format!("* [{}]: {}", stamp, entry.title)
        })
        .collect()
}

/// Writes headline output to any sink, stdout in the binary.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn announce(&mut self, url: &Url) -> Result<()> {
        writeln!(self.out, "Fetching {}", url)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn report(&mut self, teasers: &[Teaser]) -> Result<()> {
        for line in format_report(teasers) {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn report_feed(&mut self, entries: &[FeedEntry]) -> Result<()> {
        for line in format_feed(entries) {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
