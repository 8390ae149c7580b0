pub mod mailer;

pub use mailer::{Email, MailerPort};
