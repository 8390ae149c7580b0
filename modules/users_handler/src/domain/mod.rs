pub mod error;
pub mod notifications;
pub mod ports;
pub mod repo;
pub mod service;
