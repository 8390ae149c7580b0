use async_trait::async_trait;
use std::sync::Arc;

use crate::contract::{
    client::UsersHandlerApi,
    error::UsersHandlerError,
    model::{User, UserFields},
};
use crate::domain::service::Service;

/// Local implementation of the UsersHandlerApi trait that delegates to the domain service
pub struct UsersHandlerLocalClient {
    service: Arc<Service>,
}

impl UsersHandlerLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UsersHandlerApi for UsersHandlerLocalClient {
    async fn get_user(&self, id: &str) -> Result<User, UsersHandlerError> {
        self.service.get_user(id).await.map_err(Into::into)
    }

    async fn create_user(&self, fields: UserFields) -> Result<User, UsersHandlerError> {
        self.service.create_user(fields).await.map_err(Into::into)
    }

    async fn update_user(&self, id: &str, fields: UserFields) -> Result<User, UsersHandlerError> {
        self.service
            .update_user(id, fields)
            .await
            .map_err(Into::into)
    }

    async fn delete_user(&self, id: &str) -> Result<(), UsersHandlerError> {
        self.service.delete_user(id).await.map_err(Into::into)
    }
}
