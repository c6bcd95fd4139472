//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! The signing secret, store location and operator credentials live in
//! [`AppConfig`] and reach handlers through this struct.

use crate::auth::TokenService;
use crate::config::AppConfig;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Shared application state
///
/// All fields are cheap to clone: the pool and the token keys are
/// reference counted, the configuration is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Token issuer/verifier with pre-computed keys
    pub tokens: TokenService,
}

impl AppState {
    /// Create a new application state
    pub fn new(db: SqlitePool, config: AppConfig) -> Self {
        let tokens = TokenService::new(&config.auth.secret, config.auth.token_expiry_secs);

        Self {
            db,
            config: Arc::new(config),
            tokens,
        }
    }

    /// Get a reference to the database pool
    #[inline]
    pub fn db(&self) -> &SqlitePool {
        &self.db
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the token service
    #[inline]
    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }
}
