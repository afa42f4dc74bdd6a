#![allow(dead_code)]

use axum_test::TestServer;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use webhook_receiver::handlers::webhook::WebhookState;
use webhook_receiver::routes;

pub fn plain_server() -> TestServer {
    TestServer::new(routes::plain_app()).unwrap()
}

pub fn signed_server(secret: &str) -> TestServer {
    let app = routes::signed_app(WebhookState {
        secret: secret.to_string(),
    });
    TestServer::new(app).unwrap()
}

/// Compute the `X-Hub-Signature-256` value a provider would send.
pub fn sign(secret: &str, body: &[u8]) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(body);
    format!("sha256={}", hex::encode(mac.finalize().into_bytes()))
}
