use anyhow::Context;
use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, instrument};
use url::Url;

use crate::domain::error::DomainError;
use crate::domain::ports::{Email, MailerPort};

/// Wire shape of a send request accepted by the email service.
#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    body: &'a str,
}

/// HTTP adapter implementing the MailerPort.
/// Posts each email to `{base_url}/api/emails`; any non-2xx answer is a failure.
pub struct HttpMailer {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpMailer {
    pub fn new(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    fn endpoint(&self) -> Result<Url, DomainError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DomainError::notification("invalid mail service base URL"))?
            .pop_if_empty()
            .extend(&["api", "emails"]);
        Ok(url)
    }
}

#[async_trait]
impl MailerPort for HttpMailer {
    #[instrument(
        name = "users_handler.http.mailer.send",
        skip_all,
        fields(base_url = %self.base_url, to = %email.to)
    )]
    async fn send(&self, email: &Email) -> Result<(), DomainError> {
        let url = self.endpoint()?;
        let payload = SendEmailRequest {
            from: &email.from,
            to: &email.to,
            subject: &email.subject,
            body: &email.body,
        };

        let response = self
            .client
            .post(url)
            .json(&payload)
            .send()
            .await
            .with_context(|| "POST /api/emails")
            .map_err(|e| DomainError::notification(format!("{e:#}")))?;

        if !response.status().is_success() {
            return Err(DomainError::notification(format!(
                "HTTP {}",
                response.status()
            )));
        }

        debug!("Email accepted by mail service");
        Ok(())
    }
}
