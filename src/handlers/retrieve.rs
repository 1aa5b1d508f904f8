use crate::error::ApiError;
use crate::response::{reply, unmatched, RequestLine};
use crate::routes;
use crate::state::AppState;
use crate::store::Lookup;
use axum::{extract::Path, extract::State, response::Response};

/// GET /state/{key} handler - Retrieve the value stored under a key
///
/// Also mounted at `/state/{key}/`.
#[utoipa::path(
    get,
    path = routes::STATE_KEY,
    params(
        ("key" = String, Path, description = "Key to look up")
    ),
    responses(
        (status = 200, description = "Stored value", body = String, content_type = "text/plain"),
        (status = 404, description = "Key not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error", body = String, content_type = "text/plain")
    ),
    tag = "state"
)]
pub async fn retrieve_handler(
    State(state): State<AppState>,
    request: RequestLine,
    Path(key): Path<String>,
) -> Response {
    if key.is_empty() {
        return unmatched();
    }

    let outcome = match state.store.get(&key).await {
        Lookup::Found(value) => Ok(value),
        Lookup::NotFound => Err(ApiError::KeyNotFound),
        Lookup::Error(source) => Err(ApiError::RetrieveFailed { key, source }),
    };

    reply(&request, outcome)
}
