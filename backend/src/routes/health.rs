//! Health check endpoints
//!
//! - /health - process is up
//! - /health/live - liveness probe
//! - /health/ready - readiness probe, runs a query against the store

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<StoreStatus>,
}

/// Outcome of the store probe
#[derive(Serialize)]
pub struct StoreStatus {
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthResponse {
    fn plain(status: &'static str) -> Self {
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database: None,
        }
    }
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::plain("healthy"))
}

pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse::plain("alive"))
}

/// 503 while the store cannot answer `SELECT 1`
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store = match db::health_check(state.db()).await {
        Ok(()) => StoreStatus {
            healthy: true,
            message: None,
        },
        Err(e) => StoreStatus {
            healthy: false,
            message: Some(e.to_string()),
        },
    };

    if store.healthy {
        Ok(Json(HealthResponse {
            database: Some(store),
            ..HealthResponse::plain("ready")
        }))
    } else {
        Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                database: Some(store),
                ..HealthResponse::plain("not_ready")
            }),
        ))
    }
}
