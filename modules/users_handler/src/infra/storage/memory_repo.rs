use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::contract::model::{User, UserFields};
use crate::domain::repo::UsersRepository;

/// Process-local record store. Cheap to clone; clones share the same records.
#[derive(Clone, Default)]
pub struct InMemoryUsersRepository {
    records: Arc<DashMap<String, User>>,
}

impl InMemoryUsersRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl UsersRepository for InMemoryUsersRepository {
    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<User>> {
        Ok(self.records.get(id).map(|r| r.value().clone()))
    }

    async fn insert(&self, u: User) -> anyhow::Result<()> {
        self.records.insert(u.id.clone(), u);
        Ok(())
    }

    async fn update_fields(&self, id: &str, fields: UserFields) -> anyhow::Result<()> {
        // Attribute-level put: writes the record even if it vanished in between.
        self.records
            .entry(id.to_string())
            .and_modify(|u| {
                u.name = fields.name.clone();
                u.email = fields.email.clone();
            })
            .or_insert_with(|| User::with_fields(id, fields.clone()));
        Ok(())
    }

    async fn delete(&self, id: &str) -> anyhow::Result<bool> {
        Ok(self.records.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str) -> UserFields {
        UserFields {
            name: name.into(),
            email: email.into(),
        }
    }

    #[tokio::test]
    async fn update_overwrites_name_and_email_keeping_id() {
        let repo = InMemoryUsersRepository::new();
        repo.insert(User::with_fields("u-1", fields("Anna", "a@x.com")))
            .await
            .unwrap();

        repo.update_fields("u-1", fields("Anna B", "b@x.com"))
            .await
            .unwrap();

        let stored = repo.find_by_id("u-1").await.unwrap().unwrap();
        assert_eq!(stored.id, "u-1");
        assert_eq!(stored.name, "Anna B");
        assert_eq!(stored.email, "b@x.com");
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn delete_reports_whether_a_record_was_removed() {
        let repo = InMemoryUsersRepository::new();
        repo.insert(User::with_fields("u-1", fields("Anna", "a@x.com")))
            .await
            .unwrap();

        assert!(repo.delete("u-1").await.unwrap());
        assert!(!repo.delete("u-1").await.unwrap());
        assert!(repo.is_empty());
    }
}
