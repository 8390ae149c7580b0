use users_handler::contract::{error::UsersHandlerError, model::*};
use users_handler::domain::error::DomainError;
// Note: These internal module imports are only for testing
// External consumers should only use the `contract` module

#[test]
fn test_contract_models() {
    let fields = UserFields {
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
    };

    let user = User::with_fields("u-1", fields.clone());

    assert_eq!(user.id, "u-1");
    assert_eq!(user.name, "Test User");
    assert_eq!(user.email, "test@example.com");
    assert_eq!(user.fields(), fields);
}

#[test]
fn test_contract_errors() {
    let not_found = UsersHandlerError::not_found("u-1");
    assert_eq!(not_found.to_string(), "User not found: u-1");

    let notification = UsersHandlerError::notification("smtp down");
    assert_eq!(notification.to_string(), "Notification failed: smtp down");

    assert_eq!(UsersHandlerError::internal().to_string(), "Internal error");
}

#[test]
fn test_domain_to_contract_error_conversion() {
    let e: UsersHandlerError = DomainError::user_not_found("u-1").into();
    assert_eq!(e, UsersHandlerError::not_found("u-1"));

    let e: UsersHandlerError = DomainError::notification("timeout").into();
    assert_eq!(e, UsersHandlerError::notification("timeout"));

    // Store details stay internal
    let e: UsersHandlerError = DomainError::store("connection reset").into();
    assert_eq!(e, UsersHandlerError::Internal);
}
