//! Route tables for the two server variants.
//!
//! Static routes, exact method+path match. `/hello` and `/headers` carry the
//! logging/timing middleware; `/health` and the webhook route deliberately do
//! not, to keep probe and unauthenticated traffic out of the logs.

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers::{headers, health, hello, webhook};
use crate::handlers::webhook::WebhookState;
use crate::middleware::observe::instrumented;

/// Router for the plain variant: webhook payloads are logged, not verified.
pub fn plain_app() -> Router {
    Router::new()
        .route("/hello", instrumented(get(hello::hello)))
        .route("/headers", instrumented(get(headers::echo_headers)))
        .route("/health", get(health::health_check))
        .route("/", post(webhook::receive_unverified))
}

/// Router for the signed variant: webhook payloads must carry a valid
/// HMAC-SHA256 signature computed with `state.secret`.
pub fn signed_app(state: WebhookState) -> Router {
    Router::new()
        .route("/hello", instrumented(get(hello::hello)))
        .route("/headers", instrumented(get(headers::echo_headers)))
        .route("/health", get(health::health_check))
        .route("/", post(webhook::receive_verified))
        .with_state(state)
}
