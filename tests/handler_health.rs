mod common;

#[tokio::test]
async fn test_health_returns_ok() {
    let server = common::plain_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_text("OK");
}

#[tokio::test]
async fn test_health_on_signed_variant() {
    let server = common::signed_server("s");

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_text("OK");
}
