use axum::Json;
use utoipa::OpenApi;

use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "state-proxy API",
        version = "1.0.0",
        description = "Plain-text key-value endpoints backed by an external Redis store"
    ),
    paths(
        handlers::health::health_handler,
        handlers::retrieve::retrieve_handler,
        handlers::store::store_handler
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "state", description = "Key-value store operations")
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json handler
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
