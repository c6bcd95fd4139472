//! Login route

use crate::error::ApiResult;
use crate::routes::ApiJson;
use crate::services::AuthService;
use crate::state::AppState;
use axum::{extract::State, Json};
use provider_registry_shared::{LoginRequest, LoginResponse};

/// Exchange operator credentials for a token
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let response = AuthService::login(&state.config().auth, state.tokens(), &req)?;
    Ok(Json(response))
}
