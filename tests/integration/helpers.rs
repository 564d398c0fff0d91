//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use authgate_api::state::AppState;
use authgate_cache::CacheManager;
use authgate_cache::memory::MemoryCacheProvider;
use authgate_core::config::AppConfig;
use authgate_database::memory::MemoryUserStore;
use authgate_database::store::UserStore;

/// Test application context running the real router over in-memory
/// providers, so no external services are required.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// Create a new test application with the default one-hour token TTL.
    pub fn new() -> Self {
        Self::with_token_ttl(60)
    }

    /// Create a test application with a custom token TTL in minutes.
    pub fn with_token_ttl(token_ttl_minutes: u64) -> Self {
        let mut config = AppConfig::default();
        config.database.provider = "memory".to_string();
        config.cache.provider = "memory".to_string();
        config.auth.token_secret = "integration-test-secret".to_string();
        config.auth.token_ttl_minutes = token_ttl_minutes;

        let user_store: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new());
        let cache = Arc::new(CacheManager::from_provider(Arc::new(
            MemoryCacheProvider::new(&config.cache.memory),
        )));

        let state = AppState::new(Arc::new(config), user_store, cache);
        let router = authgate_api::router::build_router(state);

        Self { router }
    }

    /// Sign a user up, asserting success.
    pub async fn signup(&self, username: &str, password: &str) {
        let response = self
            .request(
                "POST",
                "/api/auth/signup",
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                })),
                None,
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Signup failed: {:?}",
            response.body
        );
    }

    /// Grant a permission entry, asserting success.
    pub async fn grant(&self, username: &str, entry: i32, add_flag: bool) {
        let response = self
            .request(
                "POST",
                "/api/users/permissions",
                Some(serde_json::json!({
                    "username": username,
                    "permission": {
                        "entry": entry,
                        "add_flag": add_flag,
                        "admin_flag": false,
                    },
                })),
                None,
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Grant failed: {:?}",
            response.body
        );
    }

    /// Login and return the access token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                })),
                None,
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// Make an HTTP request to the test app.
    ///
    /// `token` becomes a bearer `Authorization` header; `entry` becomes the
    /// `X-Permission-Entry` header for guarded routes.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
        entry: Option<i32>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }
        if let Some(entry) = entry {
            req = req.header("X-Permission-Entry", entry.to_string());
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
