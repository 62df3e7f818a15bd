use std::time::Duration;
use url::Url;
use crate::{Error, Result};

pub const DEFAULT_URL: &str = "https://heise.de/newsticker/";
pub const DEFAULT_FEED_URL: &str = "https://www.heise.de/newsticker/heise-atom.xml";
pub const DEFAULT_SELECTOR: &str = "article.a-article-teaser";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// What to fetch and which elements to report from it
#[derive(Debug, Clone)]
pub struct TargetConfig {
    pub url: Url,
    pub selector: String,
    pub timeout: Duration,
}

impl TargetConfig {
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?;
        Ok(Self {
            url,
            selector: DEFAULT_SELECTOR.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            url: Url::parse(DEFAULT_URL).expect("default URL is valid"),
            selector: DEFAULT_SELECTOR.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = TargetConfig::default();
        assert_eq!(config.url.as_str(), DEFAULT_URL);
        assert_eq!(config.selector, DEFAULT_SELECTOR);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        assert!(matches!(TargetConfig::new("invalid-url"), Err(Error::InvalidUrl(_))));
        assert!(TargetConfig::new("http://127.0.0.1:8080/news/").is_ok());
    }

    #[test]
    fn test_builders() {
        let config = TargetConfig::new("https://example.com/")
            .unwrap()
            .with_selector("li.item")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.selector, "li.item");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
