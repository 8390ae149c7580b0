use crate::contract::model::{User, UserFields};
use async_trait::async_trait;

/// Port for the domain layer: the record store operations the handler needs.
/// Records live in a single logical table keyed by `id`.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Load a user by id.
    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<User>>;
    /// Persist a fully-formed user (id already minted by the service).
    async fn insert(&self, u: User) -> anyhow::Result<()>;
    /// Overwrite name and email of the record keyed by `id`.
    async fn update_fields(&self, id: &str, fields: UserFields) -> anyhow::Result<()>;
    /// Delete by id. Returns true if a record was removed.
    async fn delete(&self, id: &str) -> anyhow::Result<bool>;
}
