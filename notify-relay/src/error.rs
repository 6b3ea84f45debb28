//! Failures on the relay path.
//!
//! Every variant is a server fault: the caller gets a bare 500 and the
//! cause goes to the log only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::queue::SinkError;
use crate::schema::UnknownMode;

/// Body returned for every server fault.
pub const SERVER_ERROR_BODY: &str = "Internal Server Error";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error(transparent)]
    UnknownMode(#[from] UnknownMode),

    #[error("failed to read request body: {0}")]
    BodyRead(#[source] axum::Error),

    #[error("failed to decode JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to encode message body: {0}")]
    Marshal(#[source] serde_json::Error),

    #[error("failed to send message: {0}")]
    Publish(#[from] SinkError),
}

impl RelayError {
    /// Snake-case event name used when logging this error.
    pub fn event(&self) -> &'static str {
        match self {
            RelayError::UnknownMode(_) => "relay_unknown_mode",
            RelayError::BodyRead(_) => "relay_body_read_failed",
            RelayError::Decode(_) => "relay_decode_failed",
            RelayError::Marshal(_) => "relay_marshal_failed",
            RelayError::Publish(_) => "relay_publish_failed",
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match &self {
            RelayError::UnknownMode(mode) => {
                error!(message_type = %mode.0, error = %self, "{}", self.event());
            }
            _ => error!(error = %self, "{}", self.event()),
        }

        (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_BODY).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_is_generic() {
        let err = RelayError::Decode(serde_json::from_str::<u8>("x").unwrap_err());
        assert_eq!(err.event(), "relay_decode_failed");

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unknown_mode_message_names_value() {
        let err = RelayError::from(UnknownMode("SNS".to_string()));
        assert!(err.to_string().contains("SNS"));
        assert_eq!(err.event(), "relay_unknown_mode");
    }

    #[test]
    fn test_publish_error_wraps_sink_error() {
        let err = RelayError::from(SinkError::Rejected);
        assert!(err.to_string().starts_with("failed to send message"));
    }
}
