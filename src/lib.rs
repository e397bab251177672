pub mod catalog;
pub mod config;
pub mod db;
pub mod errors;
pub mod http;
mod middleware;
pub mod models;
pub mod state;

use std::{path::Path, sync::Arc};

use axum::Router;
use bb8::Pool;
use bb8_redis::RedisConnectionManager;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    config::{Config, StorageBackend},
    db::{MemoryStore, PortalStore, RedisStore},
    errors::AppError,
    middleware::cors_layer,
    state::AppState,
};

/// Full application: the API under `/api` and the static directory under
/// `/static`.
pub fn create_app(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .nest("/api", http::create_http_routes(state))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(|| async { AppError::NotFound("Not Found".into()) })
        .layer(TraceLayer::new_for_http())
}

async fn create_store(config: &Config) -> Result<Arc<dyn PortalStore>, AppError> {
    match config.storage {
        StorageBackend::Redis => {
            let manager = RedisConnectionManager::new(config.redis_url.as_str())?;
            let pool = Pool::builder().build(manager).await?;
            tracing::info!(
                "Using Redis document store, database '{}'",
                config.db_name
            );
            Ok(Arc::new(RedisStore::new(pool, config.db_name.clone())))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory store, data is lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

pub async fn start_server() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::load()?;
    let store = create_store(&config).await?;
    let state = AppState::new(store, config.catalog_dir());

    let app = create_app(state, &config.static_dir)
        .layer(cors_layer(config.allowed_origins.as_deref())?);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!("INOVIX Portal API running at http://0.0.0.0:{}/api", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
