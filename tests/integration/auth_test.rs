//! Integration tests for the signup and login flows.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_signup_success() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "username": "alice",
                "password": "pw1",
            })),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_signup_duplicate_username_conflicts() {
    let app = TestApp::new();
    app.signup("alice", "pw1").await;

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "username": "alice",
                "password": "pw2",
            })),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_signup_empty_username_rejected() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "username": "",
                "password": "pw1",
            })),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_returns_token() {
    let app = TestApp::new();
    app.signup("alice", "pw1").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "alice",
                "password": "pw1",
            })),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["token"].is_string());
    assert!(response.body["data"]["expires_at"].is_string());
}

#[tokio::test]
async fn test_login_wrong_password_returns_no_token() {
    let app = TestApp::new();
    app.signup("alice", "pw1").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "alice",
                "password": "wrongpw",
            })),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.body["data"]["token"].is_null());
}

#[tokio::test]
async fn test_login_unknown_user() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "nobody",
                "password": "pw1",
            })),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_incomplete_body_rejected() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "username": "alice" })),
            None,
            None,
        )
        .await;

    // Missing password field fails deserialization in the Json extractor.
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None, None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["store"], "connected");
    assert_eq!(response.body["data"]["cache"], "connected");
}
