//! Email templates for user lifecycle notifications.

use crate::contract::model::User;
use crate::domain::ports::Email;

pub const USER_CREATED_SUBJECT: &str = "New user created";
pub const USER_CHANGED_SUBJECT: &str = "User data changed";

/// Notification sent to a freshly created user.
pub fn user_created(sender: &str, user: &User) -> Email {
    Email {
        from: sender.to_string(),
        to: user.email.clone(),
        subject: USER_CREATED_SUBJECT.to_string(),
        body: format!("New user: {}\n{}", user.name, user.id),
    }
}

/// Notification describing an update; carries both old and new name/email.
pub fn user_changed(sender: &str, to: &str, old: &User, new: &User) -> Email {
    Email {
        from: sender.to_string(),
        to: to.to_string(),
        subject: USER_CHANGED_SUBJECT.to_string(),
        body: format!(
            "Old data: {}, {}\nNew data: {}, {}\nID:{}",
            old.name, old.email, new.name, new.email, new.id
        ),
    }
}
