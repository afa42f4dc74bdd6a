//! Typed webhook events and payload decoding.
//!
//! The provider names the event in the `X-GitHub-Event` header and ships the
//! details as JSON in the body. This module turns that pair into a
//! [`WebhookEvent`] or refuses with a precise error.

use serde::Deserialize;

use crate::error::AppError;

/// Header naming the event carried in the payload.
pub const EVENT_HEADER: &str = "x-github-event";

/// A parsed webhook event.
///
/// Tagged union over the event types this receiver understands. Events are
/// logged and discarded; they have no further lifecycle.
#[derive(Debug)]
pub enum WebhookEvent {
    Ping(PingEvent),
    Push(PushEvent),
    PullRequest(PullRequestEvent),
}

/// Delivered once when a webhook is first configured.
#[derive(Debug, Deserialize)]
pub struct PingEvent {
    /// Random aphorism the provider includes as a liveness token
    pub zen: String,
    pub hook_id: u64,
}

/// Delivered on every push to a watched repository.
#[derive(Debug, Deserialize)]
pub struct PushEvent {
    /// Full git ref that was pushed, e.g. `refs/heads/main`
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub repository: Repository,
    pub pusher: Pusher,
}

/// Delivered when a pull request is opened, closed, edited, etc.
#[derive(Debug, Deserialize)]
pub struct PullRequestEvent {
    pub action: String,
    pub number: u64,
    pub repository: Repository,
}

#[derive(Debug, Deserialize)]
pub struct Repository {
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
pub struct Pusher {
    pub name: String,
}

/// Decode verified payload bytes into a typed event.
///
/// `event_type` is the raw `X-GitHub-Event` header value; pass an empty
/// string when the header is absent.
///
/// # Errors
///
/// - `AppError::UnsupportedEventType` if the type is not one this receiver
///   handles (the variant records the offending value)
/// - `AppError::MalformedPayload` if the body is not valid JSON for the
///   named event shape
pub fn parse(event_type: &str, payload: &[u8]) -> Result<WebhookEvent, AppError> {
    match event_type {
        "ping" => Ok(WebhookEvent::Ping(serde_json::from_slice(payload)?)),
        "push" => Ok(WebhookEvent::Push(serde_json::from_slice(payload)?)),
        "pull_request" => Ok(WebhookEvent::PullRequest(serde_json::from_slice(payload)?)),
        other => Err(AppError::UnsupportedEventType(other.to_string())),
    }
}
