//! Token acquisition against a mocked Azure AD token endpoint

mod common;

use common::{ACCESS_TOKEN, TOKEN_PATH, config_for, mount_token};
use serde_json::json;
use sharepoint_fetch::FetchError;
use sharepoint_fetch::api::build_http_client;
use sharepoint_fetch::auth::{ClientCredentials, acquire_token, request_token};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_acquire_token_success() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    let http = build_http_client().unwrap();
    let token = acquire_token(&http, &config_for(&server)).await.unwrap();

    assert_eq!(token.authorization_header(), format!("Bearer {}", ACCESS_TOKEN));
    assert_eq!(token.expires_in(), Some(3599));
}

#[tokio::test]
async fn test_scope_is_sent_form_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains(
            "scope=https%3A%2F%2Fgraph.microsoft.com%2F.default",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "Bearer",
            "access_token": "scoped",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let http = build_http_client().unwrap();
    let creds = ClientCredentials::from_config(&config_for(&server)).unwrap();
    let response = request_token(&http, &creds).await.unwrap();

    assert_eq!(response.authorization_header().unwrap(), "Bearer scoped");
}

#[tokio::test]
async fn test_provider_error_yields_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "invalid_client",
            "error_description": "AADSTS7000215: Invalid client secret provided.",
        })))
        .mount(&server)
        .await;

    let http = build_http_client().unwrap();
    let creds = ClientCredentials::from_config(&config_for(&server)).unwrap();
    let response = request_token(&http, &creds).await.unwrap();

    assert!(response.is_empty());
    assert!(response.error.is_none());
    assert!(matches!(
        response.authorization_header(),
        Err(FetchError::Authentication { .. })
    ));
}

#[tokio::test]
async fn test_success_status_without_access_token_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "Bearer",
            "expires_in": 3599,
        })))
        .mount(&server)
        .await;

    let http = build_http_client().unwrap();
    let creds = ClientCredentials::from_config(&config_for(&server)).unwrap();
    assert!(request_token(&http, &creds).await.unwrap().is_empty());

    let result = acquire_token(&http, &config_for(&server)).await;
    assert!(matches!(result, Err(FetchError::Authentication { .. })));
}

#[tokio::test]
async fn test_non_json_body_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let http = build_http_client().unwrap();
    let creds = ClientCredentials::from_config(&config_for(&server)).unwrap();
    assert!(request_token(&http, &creds).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_key_fails_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.sharepoint_client_sct_value = None;

    let http = build_http_client().unwrap();
    let result = acquire_token(&http, &config).await;
    assert!(matches!(result, Err(FetchError::Authentication { .. })));
}
