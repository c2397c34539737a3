//! HTTP server initialization and runtime setup.
//!
//! Owns the lifecycle of the database pool: opened before the listener binds,
//! closed after the server has drained.

use crate::application::services::{ResolutionService, ShorteningService};
use crate::config::Config;
use crate::domain::repositories::ShortUrlRepository;
use crate::infrastructure::database;
use crate::infrastructure::persistence::PgShortUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::slug_generator::{RandomSlugGenerator, SlugGenerator};

use anyhow::Result;
use axum::extract::Request;
use axum::{Router, ServiceExt};
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::normalize_path::NormalizePath;

/// Wires services on top of an open pool.
pub fn build_state(pool: Arc<PgPool>, slug_length: usize) -> AppState {
    let repository: Arc<dyn ShortUrlRepository> = Arc::new(PgShortUrlRepository::new(pool));
    let generator: Arc<dyn SlugGenerator> = Arc::new(RandomSlugGenerator::new(slug_length));

    AppState::new(
        Arc::new(ShorteningService::new(repository.clone(), generator)),
        Arc::new(ResolutionService::new(repository)),
    )
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Schema migrations
/// - Services and router
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = database::connect(&config).await?;

    if let Err(e) = database::migrate(&pool).await {
        database::close(&pool).await;
        return Err(e);
    }

    let state = build_state(Arc::new(pool.clone()), config.slug_length);
    let app = app_router(state, &config.cors);

    let served = serve(app, &config.listen_addr).await;

    database::close(&pool).await;

    served
}

async fn serve(app: NormalizePath<Router>, listen_addr: &str) -> Result<()> {
    let addr: SocketAddr = listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
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
