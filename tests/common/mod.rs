//! Helpers for integration tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use pushkind_jobmatch::crawlers::{CrawlerError, CrawlerResult, PageFetcher};
use pushkind_jobmatch::domain::notification::NotificationPayload;
use pushkind_jobmatch::models::config::CrawlConfig;
use pushkind_jobmatch::notifier::{Notifier, NotifyResult};
use pushkind_jobmatch::repository::{ResumeReader, StorageResult};

/// Resume store holding a single object in memory.
pub struct InMemoryResume {
    bytes: Vec<u8>,
    reads: AtomicUsize,
}

impl InMemoryResume {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            reads: AtomicUsize::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResumeReader for InMemoryResume {
    async fn read_object(&self, _key: &str) -> StorageResult<Vec<u8>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.bytes.clone())
    }
}

/// Serves canned HTML and counts requests. Unknown URLs fail with 503.
#[derive(Default)]
pub struct CannedPages {
    pages: HashMap<String, String>,
    requests: AtomicUsize,
}

impl CannedPages {
    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for CannedPages {
    async fn fetch_page(&self, url: &str) -> CrawlerResult<String> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.pages
            .get(url)
            .cloned()
            .ok_or(CrawlerError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE))
    }
}

/// Records every notification body instead of sending it.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().expect("sent mutex poisoned").clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, payload: &NotificationPayload) -> NotifyResult<()> {
        self.sent
            .lock()
            .expect("sent mutex poisoned")
            .push(payload.body());
        Ok(())
    }
}

pub fn crawl_config(urls: &[&str]) -> CrawlConfig {
    CrawlConfig {
        urls: urls.iter().map(|u| u.to_string()).collect(),
        ..Default::default()
    }
}

/// Packs paragraphs into an in-memory `.docx` file.
pub fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
    use docx_rs::{Docx, Paragraph, Run};

    let mut docx = Docx::new();
    for text in paragraphs {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
    }
    let mut cursor = std::io::Cursor::new(Vec::new());
    docx.build().pack(&mut cursor).expect("docx should pack");
    cursor.into_inner()
}
