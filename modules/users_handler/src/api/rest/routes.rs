use std::sync::Arc;

use axum::{
    routing::{any, get, post},
    Extension, Router,
};

use crate::api::dispatcher::RequestDispatcher;
use crate::api::rest::handlers;

/// Mount the users handler on `router`.
///
/// - `ANY /users`, `ANY /users/{id}`: dispatched by HTTP verb
/// - `POST /invoke`: gateway proxy event
/// - `GET /health`, `GET /openapi.json`
pub fn register_routes(router: Router, dispatcher: Arc<RequestDispatcher>) -> Router {
    router
        .route("/users", any(handlers::users_collection))
        .route("/users/{id}", any(handlers::users_item))
        .route("/invoke", post(handlers::invoke))
        .route("/health", get(handlers::health))
        .route("/openapi.json", get(handlers::openapi_json))
        .layer(Extension(dispatcher))
}
