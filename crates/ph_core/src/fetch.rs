use async_trait::async_trait;
use url::Url;
use crate::Result;

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page at `url` and return its body as text
    async fn fetch(&self, url: &Url) -> Result<String>;
}
