//! Middleware wrapped around every request.
//!
//! Applied outermost first:
//! - panic recovery, turning a panicking handler into a 500
//! - request logging, before the handler runs
//! - security response headers

use std::any::Any;
use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request},
    http::{header, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::error::SERVER_ERROR_BODY;

/// Headers attached to every response.
pub const SECURITY_HEADERS: [(HeaderName, &str); 3] = [
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (header::X_FRAME_OPTIONS, "deny"),
    (header::X_XSS_PROTECTION, "1; mode=block"),
];

/// Log method, path, protocol and peer address of each inbound request.
pub async fn log_request(request: Request, next: Next) -> Response {
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string());

    info!(
        remote_addr = remote_addr.as_deref().unwrap_or("-"),
        protocol = ?request.version(),
        method = %request.method(),
        path = %request.uri().path(),
        "request_received"
    );

    next.run(request).await
}

/// Convert a handler panic into a 500 response.
///
/// The security headers are added here because this response is produced
/// outside the layer that normally sets them.
pub fn recover_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    error!(panic = %detail, "request_panicked");

    let mut response = (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONNECTION, "close")],
        SERVER_ERROR_BODY,
    )
        .into_response();

    for (name, value) in SECURITY_HEADERS {
        response
            .headers_mut()
            .insert(name, HeaderValue::from_static(value));
    }

    response
}
