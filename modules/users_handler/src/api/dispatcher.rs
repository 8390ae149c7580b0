//! Single entry point routing an inbound request to one of the CRUD operations.
//!
//! The dispatcher is transport-agnostic: the REST handlers and the proxy-event
//! endpoint both reduce their input to an [`InboundRequest`] and return the
//! resulting [`OutboundResponse`] unchanged.

use std::collections::BTreeMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, instrument};

use crate::api::rest::dto::{GreetingDto, UserDto, UserPayload};
use crate::contract::model::UserFields;
use crate::domain::error::DomainError;
use crate::domain::service::Service;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const NOT_FOUND_BODY: &str = "User not found";

/// Verbs the dispatcher understands. Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Other(String),
}

impl From<&str> for Method {
    fn from(raw: &str) -> Self {
        match raw {
            "GET" => Self::Get,
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "DELETE" => Self::Delete,
            other => Self::Other(other.to_string()),
        }
    }
}

/// HTTP-style request as seen by the dispatcher.
///
/// The body stays raw bytes until an operation needs it, so a body that is not
/// valid UTF-8 or JSON fails inside the dispatcher like any other malformed input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboundRequest {
    pub method: Option<String>,
    pub id: Option<String>,
    pub body: Option<Vec<u8>>,
}

/// Structured response: status code, headers and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundResponse {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl OutboundResponse {
    /// Every response is labelled as JSON, whatever the body holds.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string());
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    pub fn from_error(e: &DispatchError) -> Self {
        Self::new(e.status(), e.body())
    }
}

/// Everything that can stop a request short of its normal response.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("no method")]
    MissingMethod,

    #[error("Method Not Allowed")]
    MethodNotAllowed { method: String },

    #[error("missing path parameter 'id'")]
    MissingId,

    #[error("request body is missing")]
    MissingBody,

    #[error("failed to read request body: {0}")]
    UnreadableBody(String),

    #[error("{0}")]
    MalformedBody(#[source] serde_json::Error),

    #[error("{0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl DispatchError {
    /// The one place where error kinds become status codes.
    pub fn status(&self) -> u16 {
        match self {
            Self::Domain(DomainError::UserNotFound { .. }) => 404,
            Self::MethodNotAllowed { .. } => 405,
            Self::MissingMethod
            | Self::MissingId
            | Self::MissingBody
            | Self::UnreadableBody(_)
            | Self::MalformedBody(_)
            | Self::Encode(_)
            | Self::Domain(_) => 500,
        }
    }

    /// Response text: the fixed not-found body, or the bare failure message.
    pub fn body(&self) -> String {
        match self {
            Self::Domain(DomainError::UserNotFound { .. }) => NOT_FOUND_BODY.to_string(),
            Self::Domain(DomainError::Store { message })
            | Self::Domain(DomainError::Notification { message }) => message.clone(),
            other => other.to_string(),
        }
    }
}

fn require_id(id: Option<String>) -> Result<String, DispatchError> {
    id.ok_or(DispatchError::MissingId)
}

/// Parse a user body. Any client-supplied `id` is read and then ignored.
fn parse_fields(body: Option<Vec<u8>>) -> Result<UserFields, DispatchError> {
    let raw = body
        .filter(|b| !b.is_empty())
        .ok_or(DispatchError::MissingBody)?;
    let payload: UserPayload =
        serde_json::from_slice(&raw).map_err(DispatchError::MalformedBody)?;
    Ok(payload.into())
}

fn json_body<T: serde::Serialize>(value: &T) -> Result<String, DispatchError> {
    serde_json::to_string(value).map_err(DispatchError::Encode)
}

/// Routes inbound requests to the domain service and shapes the responses.
#[derive(Clone)]
pub struct RequestDispatcher {
    service: Arc<Service>,
}

impl RequestDispatcher {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }

    #[instrument(
        name = "users_handler.dispatch",
        skip_all,
        fields(method = ?req.method, user_id = ?req.id)
    )]
    pub async fn handle(&self, req: InboundRequest) -> OutboundResponse {
        match self.route(req).await {
            Ok(response) => {
                info!(status = response.status, "Request handled");
                response
            }
            Err(e) => {
                let response = OutboundResponse::from_error(&e);
                if response.status >= 500 {
                    error!(status = response.status, "Request failed: {}", e);
                } else {
                    info!(status = response.status, "Request rejected: {}", e);
                }
                response
            }
        }
    }

    async fn route(&self, req: InboundRequest) -> Result<OutboundResponse, DispatchError> {
        let InboundRequest { method, id, body } = req;

        // Liveness probe, answered before anything else is looked at.
        if method.as_deref() == Some("GET") && id.is_none() {
            return Ok(OutboundResponse::new(200, json_body(&GreetingDto::new("GET"))?));
        }

        let method = method
            .as_deref()
            .map(Method::from)
            .ok_or(DispatchError::MissingMethod)?;

        match method {
            Method::Get => self.get_user(require_id(id)?).await,
            Method::Post => self.create_user(body).await,
            Method::Put => self.update_user(id, body).await,
            Method::Delete => self.delete_user(require_id(id)?).await,
            Method::Other(method) => Err(DispatchError::MethodNotAllowed { method }),
        }
    }

    async fn get_user(&self, id: String) -> Result<OutboundResponse, DispatchError> {
        let user = self.service.get_user(&id).await?;
        Ok(OutboundResponse::new(200, json_body(&UserDto::from(user))?))
    }

    async fn create_user(&self, body: Option<Vec<u8>>) -> Result<OutboundResponse, DispatchError> {
        let fields = parse_fields(body)?;
        let user = self.service.create_user(fields).await?;
        Ok(OutboundResponse::new(201, json_body(&UserDto::from(user))?))
    }

    async fn update_user(
        &self,
        id: Option<String>,
        body: Option<Vec<u8>>,
    ) -> Result<OutboundResponse, DispatchError> {
        let fields = parse_fields(body)?;
        let id = require_id(id)?;
        let user = self.service.update_user(&id, fields).await?;
        Ok(OutboundResponse::new(200, json_body(&UserDto::from(user))?))
    }

    async fn delete_user(&self, id: String) -> Result<OutboundResponse, DispatchError> {
        self.service.delete_user(&id).await?;
        Ok(OutboundResponse::new(204, ""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_parsing_is_exact() {
        assert_eq!(Method::from("GET"), Method::Get);
        assert_eq!(Method::from("POST"), Method::Post);
        assert_eq!(Method::from("PUT"), Method::Put);
        assert_eq!(Method::from("DELETE"), Method::Delete);
        assert_eq!(Method::from("PATCH"), Method::Other("PATCH".into()));
        assert_eq!(Method::from("get"), Method::Other("get".into()));
    }

    #[test]
    fn error_kinds_map_to_status_codes() {
        assert_eq!(
            DispatchError::Domain(DomainError::user_not_found("x")).status(),
            404
        );
        assert_eq!(
            DispatchError::MethodNotAllowed {
                method: "PATCH".into()
            }
            .status(),
            405
        );
        assert_eq!(DispatchError::MissingMethod.status(), 500);
        assert_eq!(DispatchError::MissingId.status(), 500);
        assert_eq!(
            DispatchError::Domain(DomainError::notification("smtp down")).status(),
            500
        );
    }

    #[test]
    fn error_bodies_are_plain_messages() {
        assert_eq!(DispatchError::MissingMethod.body(), "no method");
        assert_eq!(
            DispatchError::MethodNotAllowed {
                method: "PATCH".into()
            }
            .body(),
            "Method Not Allowed"
        );
        assert_eq!(
            DispatchError::Domain(DomainError::user_not_found("x")).body(),
            NOT_FOUND_BODY
        );
        assert_eq!(
            DispatchError::Domain(DomainError::store("disk full")).body(),
            "disk full"
        );
        assert_eq!(
            DispatchError::Domain(DomainError::notification("HTTP 503")).body(),
            "HTTP 503"
        );
        assert_eq!(
            DispatchError::UnreadableBody("length limit exceeded".into()).status(),
            500
        );
    }

    #[test]
    fn responses_are_labelled_json() {
        let r = OutboundResponse::new(204, "");
        assert_eq!(r.headers.get("Content-Type").map(String::as_str), Some(CONTENT_TYPE_JSON));
        assert_eq!(r.body, "");
    }

    #[test]
    fn parse_fields_rejects_missing_and_malformed_bodies() {
        assert!(matches!(parse_fields(None), Err(DispatchError::MissingBody)));
        assert!(matches!(
            parse_fields(Some(Vec::new())),
            Err(DispatchError::MissingBody)
        ));
        assert!(matches!(
            parse_fields(Some("{not json".into())),
            Err(DispatchError::MalformedBody(_))
        ));
        assert!(matches!(
            parse_fields(Some(vec![0xff, 0xfe, b'{'])),
            Err(DispatchError::MalformedBody(_))
        ));

        let fields = parse_fields(Some(
            r#"{"id":"client-id","name":"Anna","email":"anna@example.com"}"#.into(),
        ))
        .unwrap();
        assert_eq!(fields.name, "Anna");
        assert_eq!(fields.email, "anna@example.com");
    }
}
