//! Storage setup route

use crate::db;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::extract::State;

/// Create the schema and seed default categories; idempotent
///
/// GET /setup
pub async fn setup(State(state): State<AppState>) -> ApiResult<&'static str> {
    db::setup(state.db()).await.map_err(ApiError::Internal)?;
    Ok("Banco recriado com tabelas e dados iniciais!")
}
