//! Database connection and pool management
//!
//! This module provides SQLite connection pooling, embedded migrations
//! and the idempotent storage setup used by `GET /setup`.

use crate::config::DatabaseConfig;
use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Categories seeded into an empty store
pub const DEFAULT_CATEGORIES: [&str; 3] = ["Carpintaria", "Eletricista", "Encanador"];

/// Database configuration for pool creation
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub enforce_foreign_keys: bool,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 5,
            min_connections: 1,
            acquire_timeout_secs: 30,
            enforce_foreign_keys: false,
        }
    }
}

impl From<&DatabaseConfig> for DbConfig {
    fn from(config: &DatabaseConfig) -> Self {
        Self {
            url: config.url.clone(),
            max_connections: config.max_connections,
            enforce_foreign_keys: config.enforce_foreign_keys,
            ..Default::default()
        }
    }
}

/// Create a SQLite connection pool from application configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool> {
    create_pool_with_config(&DbConfig::from(config)).await
}

/// Connection options shared by the server pool and test pools
pub fn connect_options(url: &str, enforce_foreign_keys: bool) -> Result<SqliteConnectOptions> {
    Ok(SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(enforce_foreign_keys))
}

/// Create a SQLite connection pool with custom configuration
///
/// In-memory databases live as long as their connection, so they are
/// never reaped for idleness or age.
pub async fn create_pool_with_config(config: &DbConfig) -> Result<SqlitePool> {
    let connect_options = connect_options(&config.url, config.enforce_foreign_keys)?;

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections.min(config.max_connections))
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(None)
        .max_lifetime(None)
        .test_before_acquire(true)
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                // Service-name lookups are case-sensitive LIKE matches
                sqlx::query("PRAGMA case_sensitive_like = ON")
                    .execute(conn)
                    .await?;
                Ok(())
            })
        })
        .connect_with(connect_options)
        .await?;

    info!(
        "Database pool created: max={}, foreign_keys={}",
        config.max_connections, config.enforce_foreign_keys
    );

    Ok(pool)
}

/// Run database migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations completed successfully");
    Ok(())
}

/// Create the schema if needed and seed the default categories into an
/// empty category table. Safe to call any number of times.
///
/// Returns the number of categories inserted.
pub async fn setup(pool: &SqlitePool) -> Result<usize> {
    run_migrations(pool).await?;

    let mut tx = pool.begin().await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categoria")
        .fetch_one(&mut *tx)
        .await?;

    if existing > 0 {
        return Ok(0);
    }

    for name in DEFAULT_CATEGORIES {
        sqlx::query("INSERT INTO categoria (nome_categoria) VALUES (?)")
            .bind(name)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    info!(count = DEFAULT_CATEGORIES.len(), "Seeded default categories");
    Ok(DEFAULT_CATEGORIES.len())
}

/// Check database health
pub async fn health_check(pool: &SqlitePool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|e| {
            warn!("Database health check failed: {}", e);
            e.into()
        })
}
