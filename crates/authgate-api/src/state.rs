//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use authgate_auth::guard::AccessGuard;
use authgate_auth::password::PasswordHasher;
use authgate_auth::token::decoder::TokenDecoder;
use authgate_auth::token::encoder::TokenEncoder;
use authgate_cache::CacheManager;
use authgate_core::config::AppConfig;
use authgate_database::store::UserStore;
use authgate_service::auth::AuthService;
use authgate_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks; everything is immutable
/// after composition.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// User record store.
    pub user_store: Arc<dyn UserStore>,
    /// Cache manager (Redis or in-memory).
    pub cache: Arc<CacheManager>,
    /// Authorization guard evaluated on every protected request.
    pub guard: Arc<AccessGuard>,
    /// User lifecycle service.
    pub user_service: Arc<UserService>,
    /// Login service.
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Composes the full application state from its infrastructure pieces.
    ///
    /// This is the single composition point used by both the server binary
    /// and the integration test harness; every component receives its
    /// collaborators explicitly here.
    pub fn new(
        config: Arc<AppConfig>,
        user_store: Arc<dyn UserStore>,
        cache: Arc<CacheManager>,
    ) -> Self {
        let password_hasher = Arc::new(PasswordHasher::new());
        let token_encoder = Arc::new(TokenEncoder::new(&config.auth));
        let token_decoder = TokenDecoder::new(&config.auth);

        let guard = Arc::new(AccessGuard::new(token_decoder, Arc::clone(&cache)));
        let user_service = Arc::new(UserService::new(
            Arc::clone(&user_store),
            Arc::clone(&password_hasher),
        ));
        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&user_store),
            password_hasher,
            Arc::clone(&cache),
            token_encoder,
            &config.auth,
        ));

        Self {
            config,
            user_store,
            cache,
            guard,
            user_service,
            auth_service,
        }
    }
}
