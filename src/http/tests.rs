//! Tests for the HTTP client module

use super::*;
use crate::auth::{Authenticator, Credentials};
use crate::error::Error;
use crate::types::Method;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_token(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/api/v1/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "status_code": 200,
            "data": [{"token": token, "expires_at": Utc::now().timestamp() + 3600}]
        })))
        .mount(server)
        .await;
}

fn client_for(server: &MockServer) -> HttpClient {
    let auth = Authenticator::new(server.uri(), Credentials::new("key", "secret"));
    HttpClient::new(Arc::new(auth)).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.user_agent, "OpsInsights-API-Client");
    assert!(config.default_headers.is_empty());
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(60))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_build_url_adds_version_prefix() {
    let auth = Authenticator::new("https://app.opsinsights.com/", Credentials::new("k", "s"));
    let client = HttpClient::new(Arc::new(auth)).unwrap();

    assert_eq!(
        client.build_url("/clients/me"),
        "https://app.opsinsights.com/api/v1/clients/me"
    );
    assert_eq!(
        client.build_url("helpers/api-endpoints"),
        "https://app.opsinsights.com/api/v1/helpers/api-endpoints"
    );
}

#[test]
fn test_invalid_base_url() {
    let auth = Authenticator::new("not a url", Credentials::new("k", "s"));
    assert!(matches!(
        HttpClient::new(Arc::new(auth)),
        Err(Error::InvalidUrl(_))
    ));
}

#[tokio::test]
async fn test_get_sends_bearer_token_and_signature() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server, "tok-abc").await;

    Mock::given(method("GET"))
        .and(path("/api/v1/clients/me"))
        .and(header("Authorization", "Bearer tok-abc"))
        .and(header("Accept", "application/json"))
        .and(header("User-Agent", "OpsInsights-API-Client"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "status_code": 200,
            "data": [{"your_client_id": "42"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let envelope = client.get("/clients/me").await.unwrap();

    assert!(envelope.is_ok());
    assert_eq!(envelope.data[0]["your_client_id"], "42");
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server, "tok").await;

    Mock::given(method("GET"))
        .and(path("/api/v1/clients/me"))
        .and(header("X-Tenant", "acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true, "status_code": 200, "data": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(mock_server.uri(), Credentials::new("key", "secret"));
    let config = HttpClientConfig::builder().header("X-Tenant", "acme").build();
    let client = HttpClient::with_config(Arc::new(auth), config).unwrap();

    client.get("/clients/me").await.unwrap();
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server, "tok").await;

    Mock::given(method("POST"))
        .and(path("/api/v1/notes"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"note": "hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true, "status_code": 200, "data": [{"id": 1}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let envelope = client.post("/notes", &json!({"note": "hello"})).await.unwrap();
    assert_eq!(envelope.data, vec![json!({"id": 1})]);
}

#[tokio::test]
async fn test_failure_envelope_is_returned_unwrapped() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server, "tok").await;

    Mock::given(method("GET"))
        .and(path("/api/v1/clients/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false, "status_code": 403, "data": []
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let envelope = client
        .request(Method::GET, "/clients/me", None)
        .await
        .unwrap();
    assert!(!envelope.success);
    assert_eq!(envelope.status_code, 403);
}

#[tokio::test]
async fn test_http_error_with_record_becomes_api_error() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server, "tok").await;

    Mock::given(method("GET"))
        .and(path("/api/v1/files/C1/K1/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "status_code": 404,
            "data": [{
                "code": "E404",
                "name": "FILE_NOT_FOUND",
                "message": "File 999 does not exist",
                "resolution": "Look the file up by address first"
            }]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get("/files/C1/K1/999").await.unwrap_err();

    match err {
        Error::Api(record) => {
            assert_eq!(record.code, "E404");
            assert_eq!(record.name, "FILE_NOT_FOUND");
            assert_eq!(record.message, "File 999 does not exist");
            assert_eq!(record.resolution, "Look the file up by address first");
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_error_without_record_keeps_body() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server, "tok").await;

    Mock::given(method("GET"))
        .and(path("/api/v1/clients/me"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance window"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get("/clients/me").await.unwrap_err();

    assert!(matches!(err, Error::Transport { .. }));
    assert!(err.to_string().contains("503"));
    assert_eq!(err.response_body(), Some("maintenance window"));
}

#[tokio::test]
async fn test_non_envelope_success_body_is_transport_error() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server, "tok").await;

    Mock::given(method("GET"))
        .and(path("/api/v1/clients/me"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get("/clients/me").await.unwrap_err();
    assert_eq!(err.response_body(), Some("<html>login</html>"));
}

#[tokio::test]
async fn test_authentication_failure_stops_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/oauth2/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "status_code": 401,
            "data": [{"code": 1, "name": "DENIED", "message": "Bad key", "resolution": "Fix it"}]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/clients/me"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get("/clients/me").await.unwrap_err();
    assert!(matches!(err, Error::Authentication { .. }));
}
