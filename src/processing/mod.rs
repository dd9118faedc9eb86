use thiserror::Error;

use crate::crawlers::PageFetcher;
use crate::domain::notification::NotificationPayload;
use crate::domain::posting::MatchResult;
use crate::models::config::CrawlConfig;
use crate::notifier::{Notifier, NotifyError};
use crate::processing::collector::{CollectionStats, collect_postings};
use crate::processing::matching::{filter_matches, score_postings};
use crate::processing::resume::{ResumeError, load_resume};
use crate::repository::ResumeReader;

pub mod collector;
pub mod matching;
pub mod resume;
pub mod similarity;

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Resume(#[from] ResumeError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub collection: CollectionStats,
    pub scored: usize,
    pub matches: Vec<MatchResult>,
    pub notified: bool,
}

/// Runs one pass of resume matching: load the resume stored under
/// `resume_key`, scrape the configured pages, score and filter them, and
/// notify when anything passes the threshold.
pub async fn run_pipeline<R, F, N>(
    resume_key: &str,
    crawl: &CrawlConfig,
    repo: &R,
    fetcher: &F,
    notifier: &N,
) -> Result<RunSummary, PipelineError>
where
    R: ResumeReader + ?Sized,
    F: PageFetcher + ?Sized,
    N: Notifier + ?Sized,
{
    log::info!("Starting job matching run for resume {resume_key}");

    let resume_text = load_resume(repo, resume_key).await?;

    let (postings, collection) = collect_postings(fetcher, &crawl.urls, &crawl.keywords).await;

    let mut summary = RunSummary {
        collection,
        ..Default::default()
    };

    if !postings.is_empty() {
        let results = score_postings(&resume_text, &postings);
        summary.scored = results.len();
        summary.matches = filter_matches(results, crawl.threshold);
    }

    match NotificationPayload::new(summary.matches.clone()) {
        Some(payload) => {
            notifier.notify(&payload).await?;
            summary.notified = true;
        }
        None => log::info!("No matches found this round."),
    }

    log::info!(
        "Finished job matching run: scored={}, matched={}, notified={}",
        summary.scored,
        summary.matches.len(),
        summary.notified
    );

    Ok(summary)
}
