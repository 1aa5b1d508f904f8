use crate::error::ApiError;
use crate::response::{reply, RequestLine};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, response::Response};

/// GET /health handler - Health check endpoint
///
/// Pings the store to verify connectivity. Returns 200 if it answers,
/// 500 otherwise.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Store is reachable", body = String, content_type = "text/plain"),
        (status = 500, description = "Store is unreachable", body = String, content_type = "text/plain")
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>, request: RequestLine) -> Response {
    let outcome = match state.store.ping().await {
        Ok(()) => Ok("Service is up".to_string()),
        Err(e) => Err(ApiError::StoreUnavailable(e)),
    };

    reply(&request, outcome)
}
