//! Tests to verify that the service layer emits expected tracing spans

mod common;

use std::sync::Arc;
use tracing_test::traced_test;

use users_handler::api::dispatcher::{InboundRequest, RequestDispatcher};
use users_handler::contract::model::UserFields;
use users_handler::domain::repo::UsersRepository;
use users_handler::infra::storage::InMemoryUsersRepository;

use common::{service_with, user, FailingRepository, RecordingMailer};

fn fields(name: &str, email: &str) -> UserFields {
    UserFields {
        name: name.to_string(),
        email: email.to_string(),
    }
}

#[traced_test]
#[tokio::test]
async fn create_user_emits_spans() {
    // Arrange
    let repo = Arc::new(InMemoryUsersRepository::new());
    let service = service_with(repo, Arc::new(RecordingMailer::default()));

    // Act
    let result = service.create_user(fields("Anna", "a@x.com")).await;

    // Assert
    assert!(result.is_ok());
    assert!(logs_contain("users_handler.service.create_user"));
    assert!(logs_contain("Successfully created user"));
}

#[traced_test]
#[tokio::test]
async fn update_user_logs_email_change() {
    // Arrange
    let repo = InMemoryUsersRepository::new();
    repo.insert(user("u-1", "Anna", "a@x.com")).await.unwrap();
    let service = service_with(Arc::new(repo), Arc::new(RecordingMailer::default()));

    // Act
    let result = service.update_user("u-1", fields("Anna", "b@x.com")).await;

    // Assert
    assert!(result.is_ok());
    assert!(logs_contain("users_handler.service.update_user"));
    assert!(logs_contain("Email changed"));
}

#[traced_test]
#[tokio::test]
async fn delete_user_emits_spans() {
    // Arrange
    let repo = Arc::new(InMemoryUsersRepository::new());
    let service = service_with(repo, Arc::new(RecordingMailer::default()));

    // Act
    let result = service.delete_user("ghost").await;

    // Assert
    assert!(result.is_ok());
    assert!(logs_contain("users_handler.service.delete_user"));
    assert!(logs_contain("removed=false"));
}

#[traced_test]
#[tokio::test]
async fn dispatcher_logs_failures_at_error_level() {
    // Arrange
    let service = service_with(
        Arc::new(FailingRepository),
        Arc::new(RecordingMailer::default()),
    );
    let dispatcher = RequestDispatcher::new(service);

    // Act
    let response = dispatcher
        .handle(InboundRequest {
            method: Some("GET".into()),
            id: Some("u-1".into()),
            body: None,
        })
        .await;

    // Assert
    assert_eq!(response.status, 500);
    assert!(logs_contain("users_handler.dispatch"));
    assert!(logs_contain("ERROR"));
    assert!(logs_contain("Request failed"));
}

#[traced_test]
#[tokio::test]
async fn dispatcher_logs_not_found_as_rejection() {
    // Arrange
    let repo = Arc::new(InMemoryUsersRepository::new());
    let dispatcher = RequestDispatcher::new(service_with(repo, Arc::new(RecordingMailer::default())));

    // Act
    let response = dispatcher
        .handle(InboundRequest {
            method: Some("GET".into()),
            id: Some("missing".into()),
            body: None,
        })
        .await;

    // Assert
    assert_eq!(response.status, 404);
    assert!(logs_contain("Request rejected"));
    assert!(!logs_contain("Request failed"));
}
