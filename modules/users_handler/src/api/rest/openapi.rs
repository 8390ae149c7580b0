use utoipa::OpenApi;

use crate::api::rest::dto::{
    GreetingDto, HealthDto, ProxyRequestEvent, ProxyResponseEvent, UserDto, UserPayload,
};

/// OpenAPI document describing the wire shapes of the users handler.
#[derive(OpenApi)]
#[openapi(
    info(title = "Users Handler API", description = "CRUD handler for user records"),
    components(schemas(
        UserDto,
        UserPayload,
        GreetingDto,
        HealthDto,
        ProxyRequestEvent,
        ProxyResponseEvent
    )),
    tags((name = "users", description = "User records"))
)]
pub struct ApiDoc;
