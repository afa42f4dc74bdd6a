//! Inbound webhook signature verification.
//!
//! Implements the GitHub-style `X-Hub-Signature-256` scheme: the provider
//! sends `sha256=<hex>` where `<hex>` is HMAC-SHA256 over the raw request
//! body, keyed with a secret shared out of band.

use axum::http::HeaderMap;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the provider-computed signature.
pub const SIGNATURE_HEADER: &str = "x-hub-signature-256";

/// Expected prefix of the signature header value.
const SIGNATURE_PREFIX: &str = "sha256=";

/// Verify the signature header against the raw request body.
///
/// # Process
///
/// 1. Extract the `X-Hub-Signature-256` header
/// 2. Strip the `sha256=` prefix and hex-decode the rest
/// 3. Compute HMAC-SHA256(secret, body) and compare in constant time
///
/// Returns the original body bytes on success so callers can only reach the
/// payload through a successful check. Pure function, no side effects.
///
/// # Errors
///
/// `AppError::InvalidSignature` for a missing header, a malformed value, or
/// a mismatched digest. The cases are deliberately not distinguished in the
/// error so responses leak nothing to an unauthenticated caller.
pub fn verify<'a>(secret: &str, headers: &HeaderMap, body: &'a [u8]) -> Result<&'a [u8], AppError> {
    // Step 1: Extract the signature header
    let header = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::InvalidSignature)?;

    // Step 2: Decode "sha256=<hex>" into raw digest bytes
    let claimed = header
        .strip_prefix(SIGNATURE_PREFIX)
        .ok_or(AppError::InvalidSignature)?;
    let claimed = hex::decode(claimed).map_err(|_| AppError::InvalidSignature)?;

    // Step 3: Compute the expected digest and compare.
    // verify_slice is constant-time, which matters here: a naive == would let
    // an attacker probe the digest byte by byte.
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC key length is valid");
    mac.update(body);
    mac.verify_slice(&claimed)
        .map_err(|_| AppError::InvalidSignature)?;

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a valid `sha256=<hex>` header value for the given secret/body.
    fn sign(secret: &str, body: &[u8]) -> String {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(body);
        format!("sha256={}", hex::encode(mac.finalize().into_bytes()))
    }

    fn headers_with_signature(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(SIGNATURE_HEADER, value.parse().unwrap());
        headers
    }

    #[test]
    fn accepts_correctly_signed_body() {
        let headers = headers_with_signature(&sign("s", b"p"));

        let verified = verify("s", &headers, b"p").unwrap();
        assert_eq!(verified, b"p");
    }

    #[test]
    fn rejects_missing_header() {
        let result = verify("s", &HeaderMap::new(), b"p");
        assert!(matches!(result, Err(AppError::InvalidSignature)));
    }

    #[test]
    fn rejects_tampered_body() {
        let headers = headers_with_signature(&sign("s", b"p"));

        let result = verify("s", &headers, b"tampered");
        assert!(matches!(result, Err(AppError::InvalidSignature)));
    }

    #[test]
    fn rejects_wrong_secret() {
        let headers = headers_with_signature(&sign("other", b"p"));

        let result = verify("s", &headers, b"p");
        assert!(matches!(result, Err(AppError::InvalidSignature)));
    }

    #[test]
    fn rejects_missing_prefix() {
        // Digest is correct but the scheme tag is absent
        let bare = sign("s", b"p").trim_start_matches("sha256=").to_string();
        let headers = headers_with_signature(&bare);

        let result = verify("s", &headers, b"p");
        assert!(matches!(result, Err(AppError::InvalidSignature)));
    }

    #[test]
    fn rejects_non_hex_digest() {
        let headers = headers_with_signature("sha256=not-hex-at-all");

        let result = verify("s", &headers, b"p");
        assert!(matches!(result, Err(AppError::InvalidSignature)));
    }
}
