use async_trait::async_trait;
use tracing::info;

use crate::domain::error::DomainError;
use crate::domain::ports::{Email, MailerPort};

/// Mailer that only records emails in the log. Used for local runs.
#[derive(Debug, Clone, Default)]
pub struct LogMailer;

#[async_trait]
impl MailerPort for LogMailer {
    async fn send(&self, email: &Email) -> Result<(), DomainError> {
        info!(
            from = %email.from,
            to = %email.to,
            subject = %email.subject,
            body = %email.body,
            "Email dispatched to log"
        );
        Ok(())
    }
}
