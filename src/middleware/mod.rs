//! HTTP middleware components.
//!
//! Middleware are functions that run around route handlers.
//! They can:
//! - Log request metadata
//! - Measure handler latency
//! - Modify request/response
//!
//! None of the middleware here short-circuits: every wrapper delegates to the
//! wrapped handler exactly once.

/// Request logging and timing middleware
pub mod observe;
