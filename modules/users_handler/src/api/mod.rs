pub mod dispatcher;
pub mod rest;

pub use dispatcher::{DispatchError, InboundRequest, OutboundResponse, RequestDispatcher};
