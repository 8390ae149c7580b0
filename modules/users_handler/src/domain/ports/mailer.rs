use async_trait::async_trait;

use crate::domain::error::DomainError;

/// Plain-text email handed to the notification service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Transport-agnostic port to the outbound email service.
/// A single attempt per call; no retry, no delivery confirmation.
#[async_trait]
pub trait MailerPort: Send + Sync {
    async fn send(&self, email: &Email) -> Result<(), DomainError>;
}
