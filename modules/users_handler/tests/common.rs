#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use users_handler::api::dispatcher::RequestDispatcher;
use users_handler::contract::model::{User, UserFields};
use users_handler::domain::error::DomainError;
use users_handler::domain::ports::{Email, MailerPort};
use users_handler::domain::repo::UsersRepository;
use users_handler::domain::service::{Service, ServiceConfig};
use users_handler::infra::storage::InMemoryUsersRepository;

pub const SENDER: &str = "noreply@test.local";

/// Mailer that keeps every email it was asked to send.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<Email>>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<Email> {
        self.sent.lock().unwrap().clone()
    }

    pub fn recipients(&self) -> Vec<String> {
        self.sent().into_iter().map(|m| m.to).collect()
    }
}

#[async_trait]
impl MailerPort for RecordingMailer {
    async fn send(&self, email: &Email) -> Result<(), DomainError> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

/// Mailer whose service is always down.
#[derive(Clone, Default)]
pub struct FailingMailer;

#[async_trait]
impl MailerPort for FailingMailer {
    async fn send(&self, _email: &Email) -> Result<(), DomainError> {
        Err(DomainError::notification("mail service unavailable"))
    }
}

/// Record store that rejects every call.
#[derive(Clone, Default)]
pub struct FailingRepository;

#[async_trait]
impl UsersRepository for FailingRepository {
    async fn find_by_id(&self, _id: &str) -> anyhow::Result<Option<User>> {
        anyhow::bail!("store offline")
    }

    async fn insert(&self, _user: User) -> anyhow::Result<()> {
        anyhow::bail!("store offline")
    }

    async fn update_fields(&self, _id: &str, _fields: UserFields) -> anyhow::Result<()> {
        anyhow::bail!("store offline")
    }

    async fn delete(&self, _id: &str) -> anyhow::Result<bool> {
        anyhow::bail!("store offline")
    }
}

pub fn service_with(repo: Arc<dyn UsersRepository>, mailer: Arc<dyn MailerPort>) -> Arc<Service> {
    let config = ServiceConfig {
        sender_address: SENDER.to_string(),
    };
    Arc::new(Service::new(repo, mailer, config))
}

/// Dispatcher over a fresh in-memory store and a recording mailer.
pub fn in_memory_dispatcher() -> (RequestDispatcher, InMemoryUsersRepository, RecordingMailer) {
    let repo = InMemoryUsersRepository::new();
    let mailer = RecordingMailer::default();
    let service = service_with(Arc::new(repo.clone()), Arc::new(mailer.clone()));
    (RequestDispatcher::new(service), repo, mailer)
}

pub fn user(id: &str, name: &str, email: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
    }
}
