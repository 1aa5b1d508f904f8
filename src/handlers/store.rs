use crate::error::ApiError;
use crate::response::{reply, unmatched, RequestLine};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, response::Response};

/// POST /state/{key}/{value} handler - Store a value under a key
///
/// Overwrites any existing value and echoes the stored value back.
#[utoipa::path(
    post,
    path = routes::STATE_KEY_VALUE,
    params(
        ("key" = String, Path, description = "Key to write"),
        ("value" = String, Path, description = "Value to store; cannot contain '/'")
    ),
    responses(
        (status = 200, description = "Value stored, echoed back", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error", body = String, content_type = "text/plain")
    ),
    tag = "state"
)]
pub async fn store_handler(
    State(state): State<AppState>,
    request: RequestLine,
    Path((key, value)): Path<(String, String)>,
) -> Response {
    if key.is_empty() || value.is_empty() {
        return unmatched();
    }

    let outcome = match state.store.set(&key, &value).await {
        Ok(()) => Ok(value),
        Err(source) => Err(ApiError::StoreFailed { key, source }),
    };

    reply(&request, outcome)
}
