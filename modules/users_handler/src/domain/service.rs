use std::sync::Arc;

use crate::contract::model::{User, UserFields};
use crate::domain::error::DomainError;
use crate::domain::notifications;
use crate::domain::ports::MailerPort;
use crate::domain::repo::UsersRepository;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Domain service with the user lifecycle rules.
/// Depends only on the record store and mailer ports, not on infra types.
///
/// Every operation follows the same order: store read (if any), store write,
/// notification send(s). A failed send does not undo the write.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn UsersRepository>,
    mailer: Arc<dyn MailerPort>,
    config: ServiceConfig,
}

/// Configuration for the domain service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Fixed sender of every notification.
    pub sender_address: String,
}

pub const DEFAULT_SENDER_ADDRESS: &str = "noreply@users-handler.local";

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            sender_address: DEFAULT_SENDER_ADDRESS.to_string(),
        }
    }
}

fn store_err(e: anyhow::Error) -> DomainError {
    DomainError::store(format!("{e:#}"))
}

impl Service {
    /// Create a service with dependencies.
    pub fn new(
        repo: Arc<dyn UsersRepository>,
        mailer: Arc<dyn MailerPort>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            repo,
            mailer,
            config,
        }
    }

    #[instrument(name = "users_handler.service.get_user", skip(self), fields(user_id = %id))]
    pub async fn get_user(&self, id: &str) -> Result<User, DomainError> {
        debug!("Getting user by id");

        let user = self
            .repo
            .find_by_id(id)
            .await
            .map_err(store_err)?
            .ok_or_else(|| DomainError::user_not_found(id))?;
        debug!("Successfully retrieved user");
        Ok(user)
    }

    #[instrument(
        name = "users_handler.service.create_user",
        skip(self),
        fields(email = %fields.email, name = %fields.name)
    )]
    pub async fn create_user(&self, fields: UserFields) -> Result<User, DomainError> {
        info!("Creating new user");

        let user = User::with_fields(Uuid::new_v4().to_string(), fields);

        self.repo.insert(user.clone()).await.map_err(store_err)?;

        let mail = notifications::user_created(&self.config.sender_address, &user);
        self.mailer.send(&mail).await?;

        info!("Successfully created user with id={}", user.id);
        Ok(user)
    }

    #[instrument(
        name = "users_handler.service.update_user",
        skip(self),
        fields(user_id = %id)
    )]
    pub async fn update_user(&self, id: &str, fields: UserFields) -> Result<User, DomainError> {
        info!("Updating user");

        let previous = self
            .repo
            .find_by_id(id)
            .await
            .map_err(store_err)?
            .ok_or_else(|| DomainError::user_not_found(id))?;

        self.repo
            .update_fields(id, fields.clone())
            .await
            .map_err(store_err)?;

        let current = User::with_fields(id, fields);
        let sender = &self.config.sender_address;

        // The previous address is always told; a new address hears about it too.
        let mail = notifications::user_changed(sender, &previous.email, &previous, &current);
        self.mailer.send(&mail).await?;

        if current.email != previous.email {
            debug!("Email changed, notifying new address as well");
            let mail = notifications::user_changed(sender, &current.email, &previous, &current);
            self.mailer.send(&mail).await?;
        }

        info!("Successfully updated user");
        Ok(current)
    }

    /// Deletes unconditionally: a missing record is not an error.
    #[instrument(
        name = "users_handler.service.delete_user",
        skip(self),
        fields(user_id = %id)
    )]
    pub async fn delete_user(&self, id: &str) -> Result<(), DomainError> {
        info!("Deleting user");

        let removed = self.repo.delete(id).await.map_err(store_err)?;
        debug!(removed, "Delete issued against record store");

        Ok(())
    }
}
