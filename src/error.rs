//! Error types and HTTP error response handling.
//!
//! This module defines all request-scoped errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.
//! Fatal startup errors (configuration, bind/serve) are handled with `anyhow`
//! in the binaries and never reach this type.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Request-scoped application error.
///
/// Every variant represents a webhook request the server refuses to process.
/// There are no retries: each error is surfaced once to the caller as an
/// HTTP 400 response and logged once.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Signature header is missing, malformed, or does not match the payload.
    ///
    /// The response deliberately does not say which of the three it was.
    #[error("invalid signature")]
    InvalidSignature,

    /// Event-type header names an event this receiver does not understand.
    #[error("unsupported event type: {0:?}")]
    UnsupportedEventType(String),

    /// Payload bytes could not be decoded into the expected event shape.
    ///
    /// Wraps the underlying serde_json error via `#[from]`.
    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// Every variant maps to 400 Bad Request; the request was understood by the
/// server but rejected as unverifiable or undecodable.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = match self {
            AppError::InvalidSignature => "invalid_signature",
            AppError::UnsupportedEventType(_) => "unsupported_event_type",
            AppError::MalformedPayload(_) => "malformed_payload",
        };

        // One error log per rejected request, here so no handler can forget it
        tracing::error!(code, error = %self, "webhook request rejected");

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.to_string()
            }
        }));

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
