use chrono::{DateTime, Utc};
use ph_core::{Error, FeedEntry, PageFetcher, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::{debug, info};
use url::Url;

use crate::scrapers::utils::normalize_whitespace;

/// Reads the entries of one Atom or RSS feed.
pub struct FeedReader {
    fetcher: Box<dyn PageFetcher>,
    url: Url,
}

impl FeedReader {
    pub fn new(fetcher: Box<dyn PageFetcher>, url: Url) -> Self {
        Self { fetcher, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub async fn get_entries(&self) -> Result<Vec<FeedEntry>> {
        info!("📡 Fetching feed {}", self.url);
        let xml = self.fetcher.fetch(&self.url).await?;
        debug!("Received {} bytes", xml.len());

        let entries = parse_feed(&xml)?;
        info!("📰 Found {} feed entries", entries.len());
        Ok(entries)
    }
}

#[derive(Clone, Copy)]
enum Field {
    Title,
    Published,
    Updated,
    PubDate,
}

impl Field {
    fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"title" => Some(Field::Title),
            b"published" => Some(Field::Published),
            b"updated" => Some(Field::Updated),
            b"pubDate" => Some(Field::PubDate),
            _ => None,
        }
    }
}

#[derive(Default)]
struct PendingEntry {
    title: String,
    published: String,
    updated: String,
    pub_date: String,
}

impl PendingEntry {
    fn push(&mut self, field: Field, text: &str) {
        let target = match field {
            Field::Title => &mut self.title,
            Field::Published => &mut self.published,
            Field::Updated => &mut self.updated,
            Field::PubDate => &mut self.pub_date,
        };
        target.push_str(text);
    }

    /// `updated` wins over `published` for Atom; RSS only has `pubDate`.
    fn finish(self) -> FeedEntry {
        let published = [&self.updated, &self.published, &self.pub_date]
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .find_map(|s| parse_date(s));
        FeedEntry {
            title: normalize_whitespace(&self.title),
            published,
        }
    }
}

/// Parses Atom `<entry>` and RSS `<item>` elements in document order.
pub fn parse_feed(xml: &str) -> Result<Vec<FeedEntry>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut pending: Option<PendingEntry> = None;
    // Depth below the current entry element; fields are direct children only.
    let mut depth = 0usize;
    let mut field: Option<Field> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = e.local_name();
                if pending.is_none() {
                    if matches!(name.as_ref(), b"entry" | b"item") {
                        pending = Some(PendingEntry::default());
                        depth = 0;
                    }
                    continue;
                }
                depth += 1;
                field = if depth == 1 { Field::from_name(name.as_ref()) } else { None };
            }
            Ok(Event::End(_)) if pending.is_some() => {
                if depth == 0 {
                    if let Some(entry) = pending.take() {
                        entries.push(entry.finish());
                    }
                } else {
                    depth -= 1;
                    field = None;
                }
            }
            Ok(Event::Text(e)) => {
                if let (Some(entry), Some(field)) = (pending.as_mut(), field) {
                    let text = e
                        .unescape()
                        .map(|t| t.into_owned())
                        .unwrap_or_else(|_| String::from_utf8_lossy(&e).into_owned());
                    entry.push(field, &text);
                }
            }
            Ok(Event::CData(e)) => {
                if let (Some(entry), Some(field)) = (pending.as_mut(), field) {
                    entry.push(field, &String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::Feed(format!(
                    "XML parse error at byte {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
            _ => {}
        }
    }

    Ok(entries)
}

fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_rfc2822(s))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::TimeZone;

    const ATOM: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>heise online News</title>
  <updated>2025-10-12T16:00:00+02:00</updated>
  <entry>
    <title type="html">Linux 6.17 ist da</title>
    <link href="https://www.heise.de/news/1"/>
    <published>2025-10-12T15:30:00+02:00</published>
    <updated>2025-10-12T15:45:10+02:00</updated>
    <source><title>Not the entry title</title></source>
  </entry>
  <entry>
    <title><![CDATA[Rust & C++: ein Vergleich]]></title>
    <published>2025-10-12T09:05:00Z</published>
  </entry>
  <entry>
    <title>Ohne Datum &amp; Uhrzeit</title>
  </entry>
</feed>"#;

    #[test]
    fn test_parse_atom_feed() {
        let entries = parse_feed(ATOM).unwrap();
        assert_eq!(entries.len(), 3);

        assert_eq!(entries[0].title, "Linux 6.17 ist da");
        assert_eq!(
            entries[0].published,
            Some(Utc.with_ymd_and_hms(2025, 10, 12, 13, 45, 10).unwrap())
        );

        assert_eq!(entries[1].title, "Rust & C++: ein Vergleich");
        assert_eq!(
            entries[1].published,
            Some(Utc.with_ymd_and_hms(2025, 10, 12, 9, 5, 0).unwrap())
        );

        assert_eq!(entries[2].title, "Ohne Datum & Uhrzeit");
        assert_eq!(entries[2].published, None);
    }

    #[test]
    fn test_parse_rss_feed() {
        let rss = r#"<?xml version="1.0"?>
<rss version="2.0"><channel>
  <title>Channel</title>
  <item><title>First item</title><pubDate>Sun, 12 Oct 2025 08:00:00 +0000</pubDate></item>
  <item><title>Second item</title><pubDate>not a date</pubDate></item>
</channel></rss>"#;
        let entries = parse_feed(rss).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "First item");
        assert_eq!(
            entries[0].published,
            Some(Utc.with_ymd_and_hms(2025, 10, 12, 8, 0, 0).unwrap())
        );
        assert_eq!(entries[1].published, None);
    }

    #[test]
    fn test_feed_without_entries() {
        let entries = parse_feed(r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>x</title></feed>"#).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_mismatched_tags_are_an_error() {
        let result = parse_feed("<feed><entry><title>x</entry></feed>");
        assert!(matches!(result, Err(Error::Feed(_))));
    }

    struct StaticFetcher(&'static str);

    #[async_trait]
    impl PageFetcher for StaticFetcher {
        async fn fetch(&self, _url: &Url) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[tokio::test]
    async fn test_get_entries_uses_fetcher() {
        let url = Url::parse("https://www.heise.de/newsticker/heise-atom.xml").unwrap();
        let reader = FeedReader::new(Box::new(StaticFetcher(ATOM)), url);
        let entries = reader.get_entries().await.unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(reader.url().as_str(), "https://www.heise.de/newsticker/heise-atom.xml");
    }
}
