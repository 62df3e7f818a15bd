use std::time::Duration;
use async_trait::async_trait;
use ph_core::{PageFetcher, Result};
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("printheadlines/", env!("CARGO_PKG_VERSION"));

/// Fetches pages with one GET per call. Failures are returned, never retried.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        let response = self.client.get(url.clone()).send().await?;
        debug!("GET {} -> {}", url, response.status());
        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ph_core::Error;

    #[tokio::test]
    async fn test_connection_refused_is_http_error() {
        let fetcher = HttpFetcher::new(Duration::from_secs(2)).unwrap();
        // Port 1 is reserved and nothing listens on it.
        let url = Url::parse("http://127.0.0.1:1/").unwrap();
        let result = fetcher.fetch(&url).await;
        assert!(matches!(result, Err(Error::Http(_))));
    }
}
