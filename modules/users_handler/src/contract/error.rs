use thiserror::Error;

/// Errors that are safe to expose to other modules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsersHandlerError {
    #[error("User not found: {id}")]
    NotFound { id: String },

    #[error("Notification failed: {message}")]
    Notification { message: String },

    #[error("Internal error")]
    Internal,
}

impl UsersHandlerError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn notification(message: impl Into<String>) -> Self {
        Self::Notification {
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self::Internal
    }
}

impl From<crate::domain::error::DomainError> for UsersHandlerError {
    fn from(domain_error: crate::domain::error::DomainError) -> Self {
        use crate::domain::error::DomainError::*;
        match domain_error {
            UserNotFound { id } => Self::not_found(id),
            Notification { message } => Self::notification(message),
            Store { .. } => Self::internal(),
        }
    }
}
