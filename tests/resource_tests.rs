//! Integration tests for resource addressing and response handling.
//!
//! Each test runs the client against a local wiremock server and checks
//! the URL, method and body that went out, and the typed result that came
//! back.

use serde_json::json;
use smartfile::clients::{RequestBody, SDK_VERSION};
use smartfile::{ApiError, ApiKey, ApiPassword, BaseUrl, SmartFile, SmartFileConfig};
use std::time::Duration;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the mock server.
fn create_test_api(server: &MockServer) -> SmartFile {
    let config = SmartFileConfig::builder()
        .api_key(ApiKey::new("key").unwrap())
        .api_password(ApiPassword::new("password").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .poll_interval(Duration::from_millis(10))
        .build()
        .unwrap();
    SmartFile::new(config).unwrap()
}

// ============================================================================
// URL generation and methods
// ============================================================================

#[tokio::test]
async fn test_user_read_hits_templated_url_with_basic_auth() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/2/user/bobafett/"))
        .and(header("authorization", "Basic a2V5OnBhc3N3b3Jk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "username": "bobafett",
            "name": "Boba Fett"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_api(&server);
    let response = api.user().read("bobafett").await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.str_field("name"), Some("Boba Fett"));
}

#[tokio::test]
async fn test_user_crud_methods() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/2/user/"))
        .and(body_string("username=bobafett&email=boba%40example.com"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"username": "bobafett"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/2/user/bobafett/"))
        .and(body_string("name=Boba"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Boba"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/2/user/bobafett/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_api(&server);
    let users = api.user();

    let created = users
        .create(RequestBody::form([
            ("username", "bobafett"),
            ("email", "boba@example.com"),
        ]))
        .await
        .unwrap();
    assert_eq!(created.code, 201);

    let updated = users
        .update("bobafett", RequestBody::form([("name", "Boba")]))
        .await
        .unwrap();
    assert_eq!(updated.body, json!({"name": "Boba"}));

    let deleted = users.delete("bobafett").await.unwrap();
    assert_eq!(deleted.code, 204);
    assert_eq!(deleted.body, serde_json::Value::Null);
}

#[tokio::test]
async fn test_update_without_body_sends_no_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/2/user/bobafett/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"username": "bobafett"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_api(&server);
    api.user()
        .update("bobafett", RequestBody::Empty)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body.is_empty());
    assert!(!requests[0]
        .headers
        .keys()
        .any(|name| name.as_str().eq_ignore_ascii_case("content-type")));
}

#[tokio::test]
async fn test_list_reads_collection_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/2/role/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_api(&server);
    let response = api.role().list(&[("page", "2")]).await.unwrap();

    assert_eq!(response.body, json!({"results": []}));
}

#[tokio::test]
async fn test_tree_read_strips_leading_slash_and_passes_children() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/2/path/tree/docs/reports/"))
        .and(query_param("children", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42,
            "children": [{"name": "q1.pdf"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_api(&server);
    let response = api.path_tree().read("/docs/reports", true).await.unwrap();

    assert_eq!(response.id_field("id"), Some("42".to_string()));
}

#[tokio::test]
async fn test_tree_read_keeps_question_mark_in_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/2/path/tree/docs/why%3F%231.txt/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 9})))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_api(&server);
    let response = api.path_tree().read("/docs/why?#1.txt", false).await.unwrap();

    assert_eq!(response.id_field("id"), Some("9".to_string()));
}

#[tokio::test]
async fn test_path_read_is_tree_read() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/2/path/tree/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "path": "/"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_api(&server);
    let response = api.path().read("/", false).await.unwrap();

    assert_eq!(response.str_field("path"), Some("/"));
}

#[tokio::test]
async fn test_user_agent_header_is_sent() {
    let server = MockServer::start().await;
    let agent = format!("SmartFile Rust Client v{SDK_VERSION}");
    Mock::given(method("GET"))
        .and(path("/api/2/user/"))
        .and(header("user-agent", agent.as_str()))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_api(&server);
    api.user().list(&[]).await.unwrap();
}

// ============================================================================
// Response normalization
// ============================================================================

#[tokio::test]
async fn test_error_detail_is_taken_from_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/2/user/ghost/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
        .mount(&server)
        .await;

    let api = create_test_api(&server);
    let error = api.user().read("ghost").await.unwrap_err();

    match error {
        ApiError::Response(e) => {
            assert_eq!(e.status, 404);
            assert_eq!(e.detail, "Not found.");
            assert_eq!(e.to_string(), "Response 404: Not found.");
        }
        other => panic!("expected ResponseError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_gets_default_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/2/role/admin/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>Service Unavailable</html>"))
        .mount(&server)
        .await;

    let api = create_test_api(&server);
    let error = api.role().read("admin").await.unwrap_err();

    match error {
        ApiError::Response(e) => {
            assert_eq!(e.status, 503);
            assert_eq!(e.detail, "Server error; check response for errors");
        }
        other => panic!("expected ResponseError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_success_body_is_kept_as_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/2/user/plain/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let api = create_test_api(&server);
    let response = api.user().read("plain").await.unwrap();

    assert_eq!(response.body, json!("ok"));
}

#[tokio::test]
async fn test_transport_failure_is_request_error() {
    // Reserve a port, then free it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = SmartFileConfig::builder()
        .api_key(ApiKey::new("key").unwrap())
        .api_password(ApiPassword::new("password").unwrap())
        .base_url(BaseUrl::new(format!("http://127.0.0.1:{port}")).unwrap())
        .build()
        .unwrap();
    let api = SmartFile::new(config).unwrap();

    let error = api.user().read("bobafett").await.unwrap_err();

    match error {
        ApiError::Request(e) => assert!(!e.detail().is_empty()),
        other => panic!("expected RequestError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_tree_without_id_is_missing_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/2/path/tree/docs/a.txt/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "a.txt"})))
        .mount(&server)
        .await;

    let api = create_test_api(&server);
    let dir = tempfile::tempdir().unwrap();
    let error = api
        .path()
        .download(dir.path().join("a.txt"), "/docs/a.txt")
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::MissingField { field: "id", .. }));
    assert!(!dir.path().join("a.txt").exists());
}
