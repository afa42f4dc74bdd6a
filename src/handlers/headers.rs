//! Request header echo endpoint.

use axum::http::HeaderMap;

/// Echo every request header as one `Name: value` line.
///
/// Lines follow the header map's iteration order, which is not guaranteed
/// stable across calls. Header values are not required to be UTF-8, so
/// non-UTF-8 bytes are rendered lossily rather than dropped.
pub async fn echo_headers(headers: HeaderMap) -> String {
    let mut body = String::new();
    for (name, value) in &headers {
        body.push_str(name.as_str());
        body.push_str(": ");
        body.push_str(&String::from_utf8_lossy(value.as_bytes()));
        body.push('\n');
    }
    body
}
