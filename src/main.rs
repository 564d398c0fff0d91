//! Authgate Server — permission-gated authentication service.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use authgate_core::config::AppConfig;
use authgate_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("AUTHGATE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Authgate v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: User store ───────────────────────────────────────
    tracing::info!(
        "Initializing user store (provider: {})...",
        config.database.provider
    );
    let user_store = authgate_database::store::UserStoreManager::connect(&config.database).await?;
    tracing::info!("User store initialized");

    // ── Step 2: Cache ────────────────────────────────────────────
    tracing::info!("Initializing cache (provider: {})...", config.cache.provider);
    let cache = Arc::new(authgate_cache::provider::CacheManager::new(&config.cache).await?);
    tracing::info!("Cache initialized");

    // ── Step 3: Compose application state ────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = authgate_api::state::AppState::new(Arc::new(config), user_store, cache);
    let app = authgate_api::router::build_router(state);

    // ── Step 4: Serve with graceful shutdown ─────────────────────
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Authgate server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Authgate server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
