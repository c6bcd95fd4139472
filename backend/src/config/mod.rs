//! Configuration management for the Provider Registry backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: PR__)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    /// Let SQLite reject dangling category/provider references.
    /// Off by default: creation does not check references.
    #[serde(default)]
    pub enforce_foreign_keys: bool,
}

/// Token and operator login configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub secret: String,
    pub token_expiry_secs: i64,
    /// The single operator allowed to log in
    pub operator_user: String,
    pub operator_password: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5000,
            },
            database: DatabaseConfig {
                url: "sqlite://banco.db?mode=rwc".to_string(),
                max_connections: 5,
                enforce_foreign_keys: false,
            },
            auth: AuthConfig {
                secret: "development-secret-change-in-production".to_string(),
                token_expiry_secs: 1800, // 30 minutes
                operator_user: "admin".to_string(),
                operator_password: "1234".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with PR__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            // e.g., PR__SERVER__PORT=9000 sets server.port
            .add_source(config::Environment::with_prefix("PR").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }

    /// Problems that make this configuration unfit for production
    pub fn production_issues(&self) -> Vec<&'static str> {
        let mut issues = Vec::new();

        if self.auth.secret.contains("development") || self.auth.secret.len() < 32 {
            issues.push("Token secret must be at least 32 characters and not contain 'development'");
        }
        if self.auth.operator_password == AppConfig::default().auth.operator_password {
            issues.push("Operator password must be changed from the default");
        }
        if self.auth.token_expiry_secs <= 0 {
            issues.push("Token expiry must be positive");
        }

        issues
    }
}
