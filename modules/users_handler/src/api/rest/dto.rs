use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::dispatcher::{InboundRequest, OutboundResponse};
use crate::contract::model::{User, UserFields};

/// REST DTO for user representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// REST DTO for create/update bodies. A client-supplied `id` is accepted
/// but never used: create mints a new one and update takes the path id.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UserPayload {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
}

/// Fixed payload returned by `GET /users` (liveness probe).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GreetingDto {
    pub message: String,
    pub method: String,
    pub id: Option<String>,
}

impl GreetingDto {
    pub const MESSAGE: &'static str = "HELLO WORLD!";

    pub fn new(method: &str) -> Self {
        Self {
            message: Self::MESSAGE.to_string(),
            method: method.to_string(),
            id: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
}

/// Gateway proxy event: the raw request envelope an upstream gateway forwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequestEvent {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub path_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
}

/// Gateway proxy response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponseEvent {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

// Conversion implementations between REST DTOs and contract models

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

impl From<UserPayload> for UserFields {
    fn from(payload: UserPayload) -> Self {
        Self {
            name: payload.name,
            email: payload.email,
        }
    }
}

impl From<ProxyRequestEvent> for InboundRequest {
    fn from(event: ProxyRequestEvent) -> Self {
        Self {
            method: event.http_method,
            id: event.path_parameters.and_then(|mut p| p.remove("id")),
            body: event.body.map(String::into_bytes),
        }
    }
}

impl From<OutboundResponse> for ProxyResponseEvent {
    fn from(r: OutboundResponse) -> Self {
        Self {
            status_code: r.status,
            headers: r.headers,
            body: r.body,
        }
    }
}
