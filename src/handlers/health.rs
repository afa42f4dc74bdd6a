//! Health check endpoint for service monitoring.
//!
//! Deliberately routed without the logging/timing middleware so frequent
//! probes do not flood the logs.

/// Health check handler. Always healthy; there is no backing state to check.
pub async fn health_check() -> &'static str {
    "OK"
}
