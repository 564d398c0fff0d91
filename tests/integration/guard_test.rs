//! Integration tests for the guarded operation: the full
//! grant → login → authorize flow.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_granted_entry_is_authorized() {
    let app = TestApp::new();
    app.signup("alice", "pw1").await;
    app.grant("alice", 3, true).await;
    let token = app.login("alice", "pw1").await;

    let response = app
        .request("POST", "/api/admin/ping", None, Some(&token), Some(3))
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_ungranted_entry_is_denied() {
    let app = TestApp::new();
    app.signup("alice", "pw1").await;
    app.grant("alice", 3, true).await;
    let token = app.login("alice", "pw1").await;

    let response = app
        .request("POST", "/api/admin/ping", None, Some(&token), Some(4))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_later_entry_in_set_is_authorized() {
    // A grant that is not the first entry in the set must still authorize.
    let app = TestApp::new();
    app.signup("alice", "pw1").await;
    app.grant("alice", 1, false).await;
    app.grant("alice", 2, true).await;
    app.grant("alice", 9, true).await;
    let token = app.login("alice", "pw1").await;

    let response = app
        .request("POST", "/api/admin/ping", None, Some(&token), Some(9))
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_entry_with_access_flag_unset_is_denied() {
    let app = TestApp::new();
    app.signup("alice", "pw1").await;
    app.grant("alice", 3, false).await;
    let token = app.login("alice", "pw1").await;

    let response = app
        .request("POST", "/api/admin/ping", None, Some(&token), Some(3))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_authorization_header_is_denied() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/admin/ping", None, None, Some(3))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_entry_header_is_denied() {
    let app = TestApp::new();
    app.signup("alice", "pw1").await;
    app.grant("alice", 3, true).await;
    let token = app.login("alice", "pw1").await;

    let response = app
        .request("POST", "/api/admin/ping", None, Some(&token), None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_is_denied() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/admin/ping",
            None,
            Some("not.a.token"),
            Some(3),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_denied() {
    // A zero-minute TTL puts the expiry at issuance time; one second later
    // the token has lapsed.
    let app = TestApp::with_token_ttl(0);
    app.signup("alice", "pw1").await;
    app.grant("alice", 3, true).await;
    let token = app.login("alice", "pw1").await;

    tokio::time::sleep(std::time::Duration::from_millis(1500)).await;

    let response = app
        .request("POST", "/api/admin/ping", None, Some(&token), Some(3))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_denials_share_one_body() {
    // Expiry, cache miss, and permission absence must be externally
    // indistinguishable.
    let app = TestApp::new();
    app.signup("alice", "pw1").await;
    app.grant("alice", 3, false).await;
    let token = app.login("alice", "pw1").await;

    let flag_denial = app
        .request("POST", "/api/admin/ping", None, Some(&token), Some(3))
        .await;
    let absent_denial = app
        .request("POST", "/api/admin/ping", None, Some(&token), Some(4))
        .await;
    let token_denial = app
        .request("POST", "/api/admin/ping", None, Some("garbage"), Some(3))
        .await;

    assert_eq!(flag_denial.body, absent_denial.body);
    assert_eq!(absent_denial.body, token_denial.body);
}

#[tokio::test]
async fn test_stale_token_misses_after_permission_change() {
    // Changing permissions changes the fingerprint on the next login; the
    // old token still validates but may only resolve while its own cache
    // entry lives. A token for a fingerprint that was never cached denies.
    let app = TestApp::new();
    app.signup("alice", "pw1").await;
    app.grant("alice", 3, true).await;
    let old_token = app.login("alice", "pw1").await;

    app.grant("alice", 4, true).await;
    let new_token = app.login("alice", "pw1").await;
    assert_ne!(old_token, new_token);

    // Both resolve right now: disjoint cache entries per fingerprint.
    let old_response = app
        .request("POST", "/api/admin/ping", None, Some(&old_token), Some(3))
        .await;
    assert_eq!(old_response.status, StatusCode::OK);

    let new_response = app
        .request("POST", "/api/admin/ping", None, Some(&new_token), Some(4))
        .await;
    assert_eq!(new_response.status, StatusCode::OK);

    // The old snapshot predates the second grant.
    let old_sees_new_entry = app
        .request("POST", "/api/admin/ping", None, Some(&old_token), Some(4))
        .await;
    assert_eq!(old_sees_new_entry.status, StatusCode::UNAUTHORIZED);
}
