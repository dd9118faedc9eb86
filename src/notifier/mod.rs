use async_trait::async_trait;
use thiserror::Error;

use crate::domain::notification::NotificationPayload;

pub mod smtp;

pub use smtp::SmtpNotifier;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("mail transport failed: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

pub type NotifyResult<T> = Result<T, NotifyError>;

/// Delivers a report of matched postings.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, payload: &NotificationPayload) -> NotifyResult<()>;
}
