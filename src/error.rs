use axum::http::StatusCode;

/// Failure outcomes of the HTTP endpoints
///
/// Each variant maps to a fixed status code and plain-text message. The
/// underlying store error, when there is one, is carried along so it can
/// be logged; it never reaches the client.
#[derive(Debug)]
pub enum ApiError {
    /// Store did not answer the health check
    StoreUnavailable(anyhow::Error),
    /// Key is absent from the store
    KeyNotFound,
    /// Lookup failed for a reason other than absence
    RetrieveFailed { key: String, source: anyhow::Error },
    /// Write was rejected or the store was unreachable
    StoreFailed { key: String, source: anyhow::Error },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::KeyNotFound => StatusCode::NOT_FOUND,
            ApiError::StoreUnavailable(_)
            | ApiError::RetrieveFailed { .. }
            | ApiError::StoreFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::StoreUnavailable(_) => "Failed to connect to store".to_string(),
            ApiError::KeyNotFound => "Key not found".to_string(),
            ApiError::RetrieveFailed { key, .. } => format!("Failed to retrieve {}", key),
            ApiError::StoreFailed { key, .. } => format!("Failed to store {}", key),
        }
    }

    pub fn cause(&self) -> Option<&anyhow::Error> {
        match self {
            ApiError::StoreUnavailable(source)
            | ApiError::RetrieveFailed { source, .. }
            | ApiError::StoreFailed { source, .. } => Some(source),
            ApiError::KeyNotFound => None,
        }
    }
}
