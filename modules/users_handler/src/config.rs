use serde::{Deserialize, Serialize};

use crate::domain::service::DEFAULT_SENDER_ADDRESS;

/// Configuration for the users_handler module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UsersHandlerConfig {
    #[serde(default = "default_sender_address")]
    pub sender_address: String,
    #[serde(default)]
    pub mailer: MailerConfig,
}

impl Default for UsersHandlerConfig {
    fn default() -> Self {
        Self {
            sender_address: default_sender_address(),
            mailer: MailerConfig::default(),
        }
    }
}

/// Which mailer adapter backs the notification port.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailerKind {
    #[default]
    Log,
    Http,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MailerConfig {
    #[serde(default)]
    pub kind: MailerKind,
    /// Root URL of the email service; required for `kind: http`.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            kind: MailerKind::default(),
            base_url: None,
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

fn default_sender_address() -> String {
    DEFAULT_SENDER_ADDRESS.to_string()
}

fn default_request_timeout_ms() -> u64 {
    5000
}
