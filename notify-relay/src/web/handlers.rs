//! Relay endpoint handlers.
//!
//! The relay handler runs the whole request path synchronously:
//! 1. Acknowledge empty probe requests without touching the queue
//! 2. Resolve the configured record shape
//! 3. Read and decode the body
//! 4. Re-encode and publish one message
//! 5. Echo the queue-assigned message ID

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body, HttpBody},
    extract::{Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::error::RelayError;
use crate::queue::QueueSink;
use crate::schema::{RelayMode, UnknownMode};
use crate::Config;

/// Body sent for empty probe requests.
pub const EMPTY_BODY_ACK: &str = "Empty body";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sink: Arc<dyn QueueSink>,
    mode: Result<RelayMode, UnknownMode>,
}

impl AppState {
    /// Build state, resolving the configured message type once.
    pub fn new(config: Config, sink: Arc<dyn QueueSink>) -> Self {
        let mode = config.message_type.parse();
        Self {
            config: Arc::new(config),
            sink,
            mode,
        }
    }

    /// The active record shape, or the unrecognized configured value.
    pub fn mode(&self) -> Result<RelayMode, UnknownMode> {
        self.mode.clone()
    }
}

/// Relay a storage notification onto the queue.
pub async fn relay(State(state): State<AppState>, request: Request) -> Response {
    if declares_empty_body(&request) {
        // The gateway sends an empty POST ahead of each notification
        info!("relay_empty_body");
        return (StatusCode::OK, EMPTY_BODY_ACK).into_response();
    }

    match relay_body(&state, request.into_body()).await {
        Ok(message_id) => {
            info!(message_id = %message_id, "relay_message_created");
            (StatusCode::OK, format!("Message ID: {}", message_id)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

async fn relay_body(state: &AppState, body: Body) -> Result<String, RelayError> {
    let mode = state.mode()?;

    let bytes = to_bytes(body, state.config.max_body_bytes)
        .await
        .map_err(RelayError::BodyRead)?;

    let record = mode.decode(&bytes)?;
    info!(mode = %mode, record = ?record, "relay_record_decoded");

    let message = record.to_message_body()?;

    Ok(state.sink.publish(message).await?)
}

/// True when the request declares a zero-length body.
///
/// Besides `Content-Length: 0`, the body's own size hint is exact and zero
/// when the request has no body framing at all (HTTP/1.1 without
/// `Content-Length` or `Transfer-Encoding`, HTTP/2 with end-of-stream on
/// the headers). A body framed only by chunks or DATA frames is read.
fn declares_empty_body(request: &Request) -> bool {
    let zero_length = request
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        == Some(0);

    zero_length || request.body().size_hint().exact() == Some(0)
}

/// Any method other than POST on the relay path.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        "Method Not Allowed",
    )
        .into_response()
}

/// Any path other than the relay path.
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "404 page not found").into_response()
}
