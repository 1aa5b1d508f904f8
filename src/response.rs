use std::convert::Infallible;
use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{header, request::Parts, Method, StatusCode, Version},
    response::{IntoResponse, Response},
};

use crate::error::ApiError;

/// The parts of an incoming request recorded in the access log
#[derive(Debug, Clone)]
pub struct RequestLine {
    pub remote_addr: Option<SocketAddr>,
    pub method: Method,
    pub path: String,
    pub version: Version,
}

impl<S> FromRequestParts<S> for RequestLine
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let remote_addr = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(RequestLine {
            remote_addr,
            method: parts.method.clone(),
            path: parts.uri.path().to_string(),
            version: parts.version,
        })
    }
}

/// The router's default 404 for a path whose `{key}` or `{value}` segment is empty
///
/// matchit lets a parameter match an empty segment; such requests are
/// treated as unrouted, so no body and no access log line.
pub fn unmatched() -> Response {
    StatusCode::NOT_FOUND.into_response()
}

/// Turn a handler outcome into the plain-text response, logging it on the way out
pub fn reply(request: &RequestLine, outcome: Result<String, ApiError>) -> Response {
    match outcome {
        Ok(body) => write_response(request, StatusCode::OK, body),
        Err(err) => {
            if let Some(cause) = err.cause() {
                tracing::error!("{} {}: {:#}", request.method, request.path, cause);
            }
            write_response(request, err.status(), err.message())
        }
    }
}

/// Write `body` plus a trailing newline as `text/plain` and emit the access log line
pub fn write_response(request: &RequestLine, status: StatusCode, body: String) -> Response {
    log_request(request, status);

    (
        status,
        [(header::CONTENT_TYPE, "text/plain")],
        format!("{}\n", body),
    )
        .into_response()
}

fn log_request(request: &RequestLine, status: StatusCode) {
    let remote_addr = request
        .remote_addr
        .map(|addr| addr.to_string())
        .unwrap_or_else(|| "-".to_string());

    tracing::info!(
        remote_addr = %remote_addr,
        method = %request.method,
        path = %request.path,
        protocol = ?request.version,
        status = status.as_u16(),
        "request"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use axum::body::Body;
    use axum::http::Request;

    fn request_line() -> RequestLine {
        RequestLine {
            remote_addr: Some("10.0.0.7:53122".parse().unwrap()),
            method: Method::GET,
            path: "/state/foo".to_string(),
            version: Version::HTTP_11,
        }
    }

    async fn body_string(response: Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_success_is_plain_text_with_single_newline() {
        let response = reply(&request_line(), Ok("bar".to_string()));

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain"
        );
        assert_eq!(body_string(response).await, "bar\n");
    }

    #[tokio::test]
    async fn test_error_uses_status_and_message_of_variant() {
        let response = reply(
            &request_line(),
            Err(ApiError::RetrieveFailed {
                key: "foo".to_string(),
                source: anyhow!("timed out"),
            }),
        );

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain"
        );
        assert_eq!(body_string(response).await, "Failed to retrieve foo\n");
    }

    #[tokio::test]
    async fn test_empty_body_is_a_bare_newline() {
        let response = write_response(&request_line(), StatusCode::OK, String::new());
        assert_eq!(body_string(response).await, "\n");
    }

    #[tokio::test]
    async fn test_unmatched_is_bare_404() {
        let response = unmatched();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(header::CONTENT_TYPE).is_none());
        assert_eq!(body_string(response).await, "");
    }

    #[tokio::test]
    async fn test_request_line_extraction() {
        let request = Request::builder()
            .method("POST")
            .uri("/state/foo/bar?ignored=1")
            .extension(ConnectInfo("127.0.0.1:40000".parse::<SocketAddr>().unwrap()))
            .body(Body::empty())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let line = RequestLine::from_request_parts(&mut parts, &()).await.unwrap();

        assert_eq!(line.method, Method::POST);
        assert_eq!(line.path, "/state/foo/bar");
        assert_eq!(line.version, Version::HTTP_11);
        assert_eq!(line.remote_addr, Some("127.0.0.1:40000".parse().unwrap()));
    }

    #[tokio::test]
    async fn test_request_line_without_connect_info() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let line = RequestLine::from_request_parts(&mut parts, &()).await.unwrap();

        assert_eq!(line.method, Method::GET);
        assert!(line.remote_addr.is_none());
    }
}
