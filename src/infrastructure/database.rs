//! PostgreSQL connection pool lifecycle.
//!
//! The pool is created once at startup, handed to repositories, and closed on
//! shutdown. Nothing in the crate holds a process-wide pool.

use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

use crate::config::Config;

/// Migrations embedded at compile time from `./migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens a connection pool sized from the configuration.
///
/// `DB_POOL_SIZE` connections are kept open; up to `DB_MAX_OVERFLOW` more are
/// opened under load and reaped once idle.
///
/// # Errors
///
/// Returns an error if the initial connection cannot be established.
pub async fn connect(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .min_connections(config.db_pool_size)
        .max_connections(config.max_connections())
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("failed to connect to postgres")?;

    tracing::info!(
        min_connections = config.db_pool_size,
        max_connections = config.max_connections(),
        "Connected to database"
    );

    Ok(pool)
}

/// Creates the schema if it does not exist yet.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .context("database migration failed")?;

    tracing::info!("Database migrations completed");
    Ok(())
}

/// Waits for checked-out connections to be returned, then closes the pool.
pub async fn close(pool: &PgPool) {
    pool.close().await;
    tracing::info!("Database pool closed");
}
