use async_trait::async_trait;

use crate::contract::{
    error::UsersHandlerError,
    model::{User, UserFields},
};

/// Public API trait for in-process consumers of the users handler
#[async_trait]
pub trait UsersHandlerApi: Send + Sync {
    /// Get a user by ID
    async fn get_user(&self, id: &str) -> Result<User, UsersHandlerError>;

    /// Create a new user; the id is minted by the handler
    async fn create_user(&self, fields: UserFields) -> Result<User, UsersHandlerError>;

    /// Overwrite name and email of an existing user
    async fn update_user(&self, id: &str, fields: UserFields) -> Result<User, UsersHandlerError>;

    /// Delete a user by ID; succeeds whether or not the user existed
    async fn delete_user(&self, id: &str) -> Result<(), UsersHandlerError>;
}
