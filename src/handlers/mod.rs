//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (headers, body)
//! 2. Performs its one job (fixed response, header echo, webhook pipeline)
//! 3. Returns an HTTP response

/// Header echo endpoint
pub mod headers;
/// Liveness probe endpoint
pub mod health;
/// Greeting endpoint
pub mod hello;
/// Webhook receivers (plain and signature-verified)
pub mod webhook;
