//! Greeting endpoint.

/// Returns a fixed greeting, ignoring everything about the request.
pub async fn hello() -> &'static str {
    "Hello world!"
}
