//! Webhook receiver handlers.
//!
//! Two receivers for the same route, one per server variant:
//!
//! - [`receive_unverified`] trusts the caller and just logs what arrived
//! - [`receive_verified`] runs the full pipeline: signature check, then
//!   event parsing, then one structured log line for the event
//!
//! Both are routed without the logging/timing middleware; webhook traffic is
//! unauthenticated at the transport level and logging it twice is noise.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
};

use crate::error::AppError;
use crate::webhook::event::{self, WebhookEvent};
use crate::webhook::signature;

/// Shared state for the signature-verifying receiver.
///
/// Immutable after startup; cloning is cheap and handlers only read it.
#[derive(Debug, Clone)]
pub struct WebhookState {
    /// Shared secret the provider signs payloads with
    pub secret: String,
}

/// Plain webhook receiver: log headers and payload, accept everything.
///
/// Performs no authentication. That is an explicit trust-boundary decision
/// for a demo receiver, not an oversight; anything real must verify.
pub async fn receive_unverified(headers: HeaderMap, body: Bytes) -> StatusCode {
    for (name, value) in &headers {
        tracing::info!(
            name = %name,
            value = %String::from_utf8_lossy(value.as_bytes()),
            "header"
        );
    }

    tracing::info!(payload = %String::from_utf8_lossy(&body), "body");

    StatusCode::OK
}

/// Signature-verifying webhook receiver.
///
/// # Flow
///
/// 1. Verify the `X-Hub-Signature-256` header against the raw body
/// 2. Parse the body into a typed event, dispatched on `X-GitHub-Event`
/// 3. Log the event and return 200 with an empty body
///
/// Any failure short-circuits with 400; the error is logged once by the
/// `AppError` response conversion and no event log is emitted.
pub async fn receive_verified(
    State(state): State<WebhookState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    // Nothing past this line sees unverified bytes
    let payload = signature::verify(&state.secret, &headers, &body)?;

    // Absent event header parses as "" and is rejected as unsupported
    let event_type = headers
        .get(event::EVENT_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let parsed = event::parse(event_type, payload)?;
    log_event(&parsed);

    Ok(StatusCode::OK)
}

/// Emit one info event describing the parsed webhook event.
fn log_event(event: &WebhookEvent) {
    match event {
        WebhookEvent::Ping(ping) => {
            tracing::info!(hook_id = ping.hook_id, zen = %ping.zen, "ping event received");
        }
        WebhookEvent::Push(push) => {
            tracing::info!(
                git_ref = %push.git_ref,
                repository = %push.repository.full_name,
                pusher = %push.pusher.name,
                "push event received"
            );
        }
        WebhookEvent::PullRequest(pr) => {
            tracing::info!(
                action = %pr.action,
                number = pr.number,
                repository = %pr.repository.full_name,
                "pull request event received"
            );
        }
    }
}
