//! Webhook payload verification and parsing.
//!
//! # Webhook Flow
//!
//! 1. Provider POSTs an event to `/` with a signature and event-type header
//! 2. [`signature::verify`] proves the payload was produced by someone holding
//!    the shared secret
//! 3. [`event::parse`] decodes the verified bytes into a typed event
//! 4. The handler logs the event; nothing is stored

/// Typed events and the event-type dispatch
pub mod event;
/// HMAC-SHA256 signature verification
pub mod signature;
