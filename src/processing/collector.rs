use crate::crawlers::{CrawlerError, PageFetcher, contains_keyword, visible_text};
use crate::domain::posting::PostingCandidate;

/// What happened to a single configured URL.
#[derive(Debug)]
pub enum PageOutcome {
    Retained(PostingCandidate),
    NoKeywords,
    Failed(CrawlerError),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CollectionStats {
    pub fetched: usize,
    pub retained: usize,
    pub skipped_no_keywords: usize,
    pub failed: usize,
}

/// Fetches one page and keeps its text if a keyword occurs in it.
pub async fn inspect_page<F>(fetcher: &F, url: &str, keywords: &[String]) -> PageOutcome
where
    F: PageFetcher + ?Sized,
{
    let html = match fetcher.fetch_page(url).await {
        Ok(html) => html,
        Err(e) => return PageOutcome::Failed(e),
    };

    let text = visible_text(&html);
    if contains_keyword(&text, keywords) {
        PageOutcome::Retained(PostingCandidate {
            url: url.to_string(),
            text,
        })
    } else {
        PageOutcome::NoKeywords
    }
}

/// Visits every URL in order, one at a time, and returns the pages that
/// mention a keyword. Failures are logged and skipped.
pub async fn collect_postings<F>(
    fetcher: &F,
    urls: &[String],
    keywords: &[String],
) -> (Vec<PostingCandidate>, CollectionStats)
where
    F: PageFetcher + ?Sized,
{
    let mut stats = CollectionStats::default();
    let mut postings = Vec::new();
    for url in urls {
        match inspect_page(fetcher, url, keywords).await {
            PageOutcome::Retained(posting) => {
                stats.fetched += 1;
                stats.retained += 1;
                postings.push(posting);
            }
            PageOutcome::NoKeywords => {
                stats.fetched += 1;
                stats.skipped_no_keywords += 1;
                log::debug!("No role keywords on {url}");
            }
            PageOutcome::Failed(e) => {
                stats.failed += 1;
                log::error!("Error scraping {url}: {e}");
            }
        }
    }

    log::info!(
        "Finished collecting postings: urls={}, fetched={}, retained={}, skipped_no_keywords={}, failed={}",
        urls.len(),
        stats.fetched,
        stats.retained,
        stats.skipped_no_keywords,
        stats.failed
    );

    (postings, stats)
}
