//! Integration tests for response decoding and `X-Resultset` pagination.

use serde_json::json;
use weebly_cloud::{BaseUrl, CloudClient, CloudConfig, CloudError, Params, PublicKey, SecretKey};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> CloudClient {
    let config = CloudConfig::builder()
        .public_key(PublicKey::new("test-public").unwrap())
        .secret_key(SecretKey::new("test-secret").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    CloudClient::new(config).unwrap()
}

fn page(
    total: &'static str,
    limit: &'static str,
    page: &'static str,
    body: serde_json::Value,
) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("X-Resultset-Total", total)
        .insert_header("X-Resultset-Limit", limit)
        .insert_header("X-Resultset-Page", page)
        .set_body_json(body)
}

// ============================================================================
// Error precedence
// ============================================================================

#[tokio::test]
async fn test_error_body_wins_over_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/404"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"error": {"message": "User not found", "code": 2}})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).get("user/404").await.unwrap_err();

    match err {
        CloudError::Api { message, code } => {
            assert_eq!(message, "User not found");
            assert_eq!(code, 2);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_body_on_success_status_is_still_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/user"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"error": {"message": "Email taken", "code": "13"}})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).post("user").await.unwrap_err();
    assert!(matches!(err, CloudError::Api { code: 13, .. }));
}

#[tokio::test]
async fn test_error_status_without_structured_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>down</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).get("account").await.unwrap_err();
    assert!(matches!(err, CloudError::Status { code: 503 }));
    assert_eq!(err.code(), Some(503));
}

#[tokio::test]
async fn test_non_json_success_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).get("account").await.unwrap_err();
    assert!(matches!(err, CloudError::Decode(_)));
}

// ============================================================================
// Pagination
// ============================================================================

#[tokio::test]
async fn test_pagination_headers_are_read() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/1/site/2/page"))
        .respond_with(page("25", "10", "1", json!([])))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .get("user/1/site/2/page")
        .await
        .unwrap();

    assert!(response.is_paginated());
    assert_eq!(response.total(), Some(25));
    assert_eq!(response.limit(), Some(10));
    assert_eq!(response.page(), Some(1));
    assert_eq!(response.page_count(), Some(3));
}

#[tokio::test]
async fn test_next_and_previous_page_reuse_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/1/site"))
        .and(query_param("limit", "10"))
        .and(query_param("page", "2"))
        .respond_with(page("25", "10", "2", json!({"sites": [{"site_id": "b"}]})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/user/1/site"))
        .and(query_param("limit", "10"))
        .and(query_param("page", "1"))
        .respond_with(page("25", "10", "1", json!({"sites": [{"site_id": "a"}]})))
        .expect(1)
        .mount(&server)
        .await;

    // Mounted last so the page-specific mocks above take precedence.
    Mock::given(method("GET"))
        .and(path("/user/1/site"))
        .and(query_param("limit", "10"))
        .respond_with(page("25", "10", "1", json!({"sites": [{"site_id": "a"}]})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut params = Params::new();
    params.insert("limit".to_string(), json!(10));

    let first = client.get_with("user/1/site", params).await.unwrap();
    assert!(first.previous_page(&client).await.unwrap().is_none());

    let second = first.next_page(&client).await.unwrap().unwrap();
    assert_eq!(second.page(), Some(2));
    assert_eq!(second.body["sites"][0]["site_id"], "b");
    // The first response's parameters are untouched.
    assert!(!first.params.contains_key("page"));

    let back = second.previous_page(&client).await.unwrap().unwrap();
    assert_eq!(back.page(), Some(1));
}

#[tokio::test]
async fn test_last_page_has_no_next() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/1/site"))
        .respond_with(page("25", "10", "3", json!({"sites": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let last = client.get("user/1/site").await.unwrap();
    assert!(last.next_page(&client).await.unwrap().is_none());
}

#[tokio::test]
async fn test_unpaginated_response_has_no_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"account": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.get("account").await.unwrap();

    assert!(response.pagination.is_none());
    assert!(response.next_page(&client).await.unwrap().is_none());
    assert!(response.previous_page(&client).await.unwrap().is_none());
}
