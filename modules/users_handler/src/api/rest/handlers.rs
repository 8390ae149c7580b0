use std::sync::Arc;

use axum::{body::Body, extract::Path, http::Method, response::Json, Extension};
use tracing::{info, warn};
use utoipa::OpenApi;

use crate::api::dispatcher::{DispatchError, InboundRequest, OutboundResponse, RequestDispatcher};
use crate::api::rest::dto::{HealthDto, ProxyRequestEvent, ProxyResponseEvent};
use crate::api::rest::openapi::ApiDoc;

/// Upper bound on a buffered request body (axum's default limit).
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Buffer the raw body; an empty body counts as absent.
async fn read_body(body: Body) -> Result<Option<Vec<u8>>, DispatchError> {
    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| DispatchError::UnreadableBody(e.to_string()))?;
    Ok((!bytes.is_empty()).then(|| bytes.to_vec()))
}

async fn dispatch(
    dispatcher: &RequestDispatcher,
    method: Method,
    id: Option<String>,
    body: Body,
) -> OutboundResponse {
    // The greeting never looks at the body.
    let body = if method == Method::GET && id.is_none() {
        None
    } else {
        match read_body(body).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Rejecting request: {}", e);
                return OutboundResponse::from_error(&e);
            }
        }
    };

    dispatcher
        .handle(InboundRequest {
            method: Some(method.as_str().to_string()),
            id,
            body,
        })
        .await
}

/// Any verb on `/users` (no path id)
pub async fn users_collection(
    Extension(dispatcher): Extension<Arc<RequestDispatcher>>,
    method: Method,
    body: Body,
) -> OutboundResponse {
    info!("{} /users", method);
    dispatch(&dispatcher, method, None, body).await
}

/// Any verb on `/users/{id}`
pub async fn users_item(
    Extension(dispatcher): Extension<Arc<RequestDispatcher>>,
    method: Method,
    Path(id): Path<String>,
    body: Body,
) -> OutboundResponse {
    info!("{} /users/{}", method, id);
    dispatch(&dispatcher, method, Some(id), body).await
}

/// Gateway proxy event in, proxy response envelope out
pub async fn invoke(
    Extension(dispatcher): Extension<Arc<RequestDispatcher>>,
    Json(event): Json<ProxyRequestEvent>,
) -> Json<ProxyResponseEvent> {
    info!("Invoking dispatcher with proxy event");

    let response = dispatcher.handle(event.into()).await;
    Json(response.into())
}

pub async fn health() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
    })
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
