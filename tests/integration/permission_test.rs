//! Integration tests for the permission grant flow.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_grant_success() {
    let app = TestApp::new();
    app.signup("alice", "pw1").await;

    let response = app
        .request(
            "POST",
            "/api/users/permissions",
            Some(serde_json::json!({
                "username": "alice",
                "permission": { "entry": 3, "add_flag": true, "admin_flag": false },
            })),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_grant_same_entry_twice_conflicts() {
    let app = TestApp::new();
    app.signup("alice", "pw1").await;
    app.grant("alice", 3, true).await;

    let response = app
        .request(
            "POST",
            "/api/users/permissions",
            Some(serde_json::json!({
                "username": "alice",
                "permission": { "entry": 3, "add_flag": false, "admin_flag": true },
            })),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_grant_unknown_user() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/users/permissions",
            Some(serde_json::json!({
                "username": "nobody",
                "permission": { "entry": 3, "add_flag": true, "admin_flag": false },
            })),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_grant_flags_default_to_false() {
    let app = TestApp::new();
    app.signup("alice", "pw1").await;

    let response = app
        .request(
            "POST",
            "/api/users/permissions",
            Some(serde_json::json!({
                "username": "alice",
                "permission": { "entry": 3 },
            })),
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // The defaulted add_flag=false denies the guarded call.
    let token = app.login("alice", "pw1").await;
    let response = app
        .request("POST", "/api/admin/ping", None, Some(&token), Some(3))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
