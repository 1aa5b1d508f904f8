// Route path constants - single source of truth for all API paths

use axum::{
    routing::{get, post},
    Router,
};

use crate::api_doc;
use crate::handlers::{health_handler, retrieve_handler, store_handler};
use crate::state::AppState;

pub const HEALTH: &str = "/health";
pub const STATE_KEY: &str = "/state/{key}";
pub const STATE_KEY_SLASH: &str = "/state/{key}/";
pub const STATE_KEY_VALUE: &str = "/state/{key}/{value}";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Build the application router
///
/// Anything not listed here falls through to axum's default 404 (or 405
/// for a known path with the wrong method) and is not access-logged.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH, get(health_handler))
        .route(STATE_KEY, get(retrieve_handler))
        .route(STATE_KEY_SLASH, get(retrieve_handler))
        .route(STATE_KEY_VALUE, post(store_handler))
        .route(OPENAPI_JSON, get(api_doc::openapi_handler))
        .with_state(state)
}
