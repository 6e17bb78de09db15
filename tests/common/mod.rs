//! Shared utilities for integration tests.

use std::net::SocketAddr;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use http_switch::{BoxError, ConnectionInfo};

/// Initialize test logging; repeated calls are no-ops.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "http_switch=debug".into()),
        )
        .try_init();
}

/// Build a request the way the server adapter would deliver it, minus any
/// connection addressing.
#[allow(dead_code)]
pub fn request(method: Method, path: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header("Host", "example.com")
        .body(Body::empty())
        .unwrap()
}

/// Build a request carrying socket addressing, as a live connection would.
#[allow(dead_code)]
pub fn request_with_connection(
    method: Method,
    path: &str,
    remote: SocketAddr,
    local: SocketAddr,
) -> Request<Body> {
    let mut req = request(method, path);
    req.extensions_mut().insert(ConnectionInfo {
        remote: Some(remote),
        local: Some(local),
    });
    req
}

/// Handler helper: a response with the given status and body.
pub fn respond(status: u16, body: &'static str) -> Result<Response, BoxError> {
    let response = Response::builder()
        .status(status)
        .body(Body::from(body))
        .unwrap();
    Ok(response)
}

/// Collect a response body into a string.
#[allow(dead_code)]
pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
