use std::time::Duration;

use async_trait::async_trait;
use scraper::Html;
use thiserror::Error;

pub mod careers;

/// Elements whose text never reaches the reader.
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

#[derive(Debug, Error)]
pub enum CrawlerError {
    #[error("failed to build HTTP client: {0}")]
    Build(String),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),
}

pub type CrawlerResult<T> = Result<T, CrawlerError>;

/// Fetches the raw HTML of a single page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str) -> CrawlerResult<String>;
}

/// Builds the HTTP client shared by all page fetches.
///
/// `timeout` bounds each request from connect to the end of the body.
pub fn build_reqwest_client(timeout: Duration, user_agent: &str) -> CrawlerResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
        .map_err(|e| CrawlerError::Build(e.to_string()))
}

/// Extracts the visible text of an HTML document, lowercased.
///
/// Text nodes are separated by single spaces and runs of whitespace are
/// collapsed.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut parts = Vec::new();
    for node in document.tree.root().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
        });
        if !hidden {
            parts.extend(text.split_whitespace());
        }
    }

    parts.join(" ").to_lowercase()
}

/// Returns `true` when any keyword occurs in `text`, ignoring case.
///
/// Plain substring matching: `sre` also matches inside unrelated words.
pub fn contains_keyword(text: &str, keywords: &[String]) -> bool {
    let text = text.to_lowercase();
    keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .any(|k| text.contains(&k))
}
