pub mod http_mailer;
pub mod log_mailer;

pub use http_mailer::HttpMailer;
pub use log_mailer::LogMailer;
