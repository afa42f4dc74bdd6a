//! Webhook demo servers.
//!
//! Library crate shared by two binaries:
//!
//! - `webhook-plain`: demonstration endpoints plus an unauthenticated webhook
//!   receiver that logs whatever arrives
//! - `webhook-signed`: the same endpoints, with the webhook receiver
//!   verifying a GitHub-style HMAC-SHA256 signature and parsing the payload
//!   into a typed event before logging it
//!
//! # Architecture
//!
//! - **Web framework**: Axum (async HTTP server)
//! - **Verification**: HMAC-SHA256 over the raw body, constant-time compare
//! - **Observability**: tracing, with per-route logging/timing middleware

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod webhook;
