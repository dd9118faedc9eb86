use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::domain::notification::NotificationPayload;
use crate::models::config::{MailConfig, SmtpConfig};
use crate::notifier::{Notifier, NotifyResult};

/// Sender, recipient and subject shared by every notification.
#[derive(Clone, Debug)]
pub struct MailHeaders {
    sender: Mailbox,
    recipient: Mailbox,
    subject: String,
}

impl MailHeaders {
    /// Parses the configured addresses.
    pub fn from_config(config: &MailConfig) -> NotifyResult<Self> {
        Ok(Self {
            sender: config.sender.parse()?,
            recipient: config.recipient.parse()?,
            subject: config.subject.clone(),
        })
    }

    /// Builds the plain-text message for `payload`.
    pub fn message(&self, payload: &NotificationPayload) -> NotifyResult<Message> {
        let message = Message::builder()
            .from(self.sender.clone())
            .to(self.recipient.clone())
            .subject(self.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(payload.body())?;
        Ok(message)
    }
}

/// Sends notifications through an authenticated SMTPS relay.
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    headers: MailHeaders,
}

impl SmtpNotifier {
    /// Prepares the transport. No connection is opened until the first send.
    pub fn new(mail: &MailConfig, smtp: &SmtpConfig) -> NotifyResult<Self> {
        let headers = MailHeaders::from_config(mail)?;
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp.host)?
            .port(smtp.port)
            .credentials(Credentials::new(smtp.user.clone(), smtp.password.clone()))
            .build();

        Ok(Self { transport, headers })
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn notify(&self, payload: &NotificationPayload) -> NotifyResult<()> {
        let message = self.headers.message(payload)?;
        self.transport.send(message).await?;
        log::info!(
            "Email sent to {} with {} matches",
            self.headers.recipient,
            payload.matches().len()
        );
        Ok(())
    }
}
