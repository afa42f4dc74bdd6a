mod common;

#[tokio::test]
async fn test_hello_returns_greeting() {
    let server = common::plain_server();

    let response = server.get("/hello").await;

    response.assert_status_ok();
    response.assert_text("Hello world!");
}

#[tokio::test]
async fn test_hello_ignores_headers_and_query() {
    let server = common::signed_server("s");

    let response = server
        .get("/hello")
        .add_query_param("name", "ignored")
        .add_header("X-Anything", "whatever")
        .add_header("Accept", "application/json")
        .await;

    response.assert_status_ok();
    response.assert_text("Hello world!");
}
