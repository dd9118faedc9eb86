use async_trait::async_trait;

use crate::crawlers::{CrawlerError, CrawlerResult, PageFetcher, build_reqwest_client};
use crate::models::config::CrawlConfig;

/// Fetches career pages over HTTP with a per-request timeout.
pub struct CareersPageCrawler {
    client: reqwest::Client,
}

impl CareersPageCrawler {
    pub fn new(config: &CrawlConfig) -> CrawlerResult<Self> {
        Ok(Self {
            client: build_reqwest_client(config.request_timeout(), &config.user_agent)?,
        })
    }
}

#[async_trait]
impl PageFetcher for CareersPageCrawler {
    async fn fetch_page(&self, url: &str) -> CrawlerResult<String> {
        let res = self.client.get(url).send().await?;
        if !res.status().is_success() {
            return Err(CrawlerError::Status(res.status()));
        }
        Ok(res.text().await?)
    }
}
