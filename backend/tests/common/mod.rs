//! Common test utilities for integration tests
//!
//! Each `TestApp` owns a private in-memory SQLite database held open by a
//! single pooled connection.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use provider_registry_backend::{
    config::AppConfig,
    db::{self, DbConfig},
    routes,
    state::AppState,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub pool: SqlitePool,
    pub state: AppState,
}

impl TestApp {
    /// Create a test application with migrations applied and no data
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    pub async fn with_config(config: AppConfig) -> Self {
        let pool = db::create_pool_with_config(&DbConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            enforce_foreign_keys: config.database.enforce_foreign_keys,
            ..Default::default()
        })
        .await
        .expect("Failed to create test database pool");

        db::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let state = AppState::new(pool.clone(), config);
        let app = routes::create_router(state.clone());

        Self { app, pool, state }
    }

    async fn send(&self, method: &str, path: &str, body: Option<Value>) -> (StatusCode, String) {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        self.send("GET", path, None).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, String) {
        self.send("POST", path, Some(body)).await
    }

    /// Make a PUT request with JSON body
    pub async fn put(&self, path: &str, body: Value) -> (StatusCode, String) {
        self.send("PUT", path, Some(body)).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> (StatusCode, String) {
        self.send("DELETE", path, None).await
    }

    /// Log in as the default operator and return the token
    pub async fn login(&self) -> String {
        let (status, body) = self
            .post("/login", json!({ "user": "admin", "password": "1234" }))
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {}", body);
        json_body(&body)["token"].as_str().unwrap().to_string()
    }

    /// Create a category and return its id
    pub async fn create_category(&self, name: &str) -> i64 {
        let (status, body) = self.post("/categoria", json!({ "nome_categoria": name })).await;
        assert_eq!(status, StatusCode::OK, "create category failed: {}", body);
        json_body(&body)["id_categoria"].as_i64().unwrap()
    }

    /// Create a provider and return its id
    pub async fn create_provider(&self, token: &str, name: &str, experience: i64, category: i64) -> i64 {
        let (status, body) = self
            .post(
                &format!("/prestador?token={}", token),
                json!({
                    "nome_prestador": name,
                    "tempo_experiencia": experience,
                    "id_categoria": category
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create provider failed: {}", body);
        json_body(&body)["codigo_prestador"].as_i64().unwrap()
    }

    /// Create a service and return the response body
    pub async fn create_service(&self, name: &str, provider: i64) -> Value {
        let (status, body) = self
            .post(
                "/servico",
                json!({ "nome_servico": name, "codigo_prestador": provider }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create service failed: {}", body);
        json_body(&body)
    }

    /// Number of service rows pointing at a provider
    pub async fn count_services_of(&self, provider: i64) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM servico WHERE codigo_prestador = ?")
            .bind(provider)
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}

pub fn json_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|e| panic!("invalid JSON {:?}: {}", body, e))
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.database.url = "sqlite::memory:".to_string();
    config.auth.secret = "test-secret-key-for-testing-only-32chars".to_string();
    config
}
