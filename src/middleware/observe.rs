//! Request logging and timing middleware.
//!
//! Both middleware follow the same `handle(request, next)` shape axum's
//! [`from_fn`] expects, and are applied to a route by the fixed composition
//! routine [`instrumented`] rather than nested ad hoc at each call site.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, Request},
    middleware::{Next, from_fn},
    response::Response,
    routing::MethodRouter,
};

/// Log request metadata, then delegate.
///
/// Emits exactly one info event per request with the client address, method,
/// URL, and protocol version. The client address comes from the
/// `ConnectInfo` extension and is `-` when the server was not started with
/// connect-info (e.g. under an in-process test harness).
pub async fn log_request(request: Request, next: Next) -> Response {
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_string());

    tracing::info!(
        client = %client,
        method = %request.method(),
        url = %request.uri(),
        version = ?request.version(),
        "request received"
    );

    next.run(request).await
}

/// Delegate, then log how long the handler took.
pub async fn time_request(request: Request, next: Next) -> Response {
    let start = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        duration_ms = start.elapsed().as_millis() as u64,
        "request completed"
    );

    response
}

/// Apply the observation middleware to a route in fixed order.
///
/// Logging sits outermost, timing inside it, the handler innermost, so the
/// measured duration excludes the logging middleware's own work. Axum runs
/// the last-added layer first, hence timing is added before logging.
pub fn instrumented<S>(route: MethodRouter<S>) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    route.layer(from_fn(time_request)).layer(from_fn(log_request))
}
