//! HTTP server bootstrap.

use crate::application::services::UrlService;
use crate::config::Config;
use crate::infrastructure::persistence::{
    SqliteIdAllocator, SqliteUrlRepository, connect_pool, migrate,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (database file created if missing)
/// - Schema migrations
/// - URL service
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(
        &config.database_url,
        config.db_max_connections,
        config.busy_timeout(),
    )
    .await
    .with_context(|| format!("Failed to open database {}", config.database_url))?;
    tracing::info!("Connected to database");

    migrate(&pool).await.context("Failed to migrate")?;
    tracing::info!("Migrations applied");

    let pool = Arc::new(pool);
    let url_repository = Arc::new(SqliteUrlRepository::new(pool.clone()));
    let id_allocator = Arc::new(SqliteIdAllocator::new(pool.clone()));
    let url_service = Arc::new(UrlService::new(url_repository, id_allocator));

    let state = AppState::new(url_service, config.base_url.clone());
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
