//! Provider routes

use crate::auth::Operator;
use crate::error::ApiResult;
use crate::routes::{ApiJson, ApiPath};
use crate::services::ProviderService;
use crate::state::AppState;
use axum::{extract::State, Extension, Json};
use provider_registry_shared::{
    CreateProviderRequest, MessageResponse, ProviderResponse, UpdateProviderRequest,
};
use tracing::debug;

/// POST /prestador
pub async fn create_provider(
    State(state): State<AppState>,
    Extension(operator): Extension<Operator>,
    ApiJson(req): ApiJson<CreateProviderRequest>,
) -> ApiResult<Json<ProviderResponse>> {
    debug!(operator = %operator.user, "Creating provider");
    let provider = ProviderService::create(state.db(), req).await?;
    Ok(Json(provider))
}

/// GET /prestador
pub async fn list_providers(State(state): State<AppState>) -> ApiResult<Json<Vec<ProviderResponse>>> {
    let providers = ProviderService::list(state.db()).await?;
    Ok(Json(providers))
}

/// PUT /prestador/:id
pub async fn update_provider(
    State(state): State<AppState>,
    Extension(operator): Extension<Operator>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateProviderRequest>,
) -> ApiResult<Json<ProviderResponse>> {
    debug!(operator = %operator.user, provider_id = id, "Updating provider");
    let provider = ProviderService::update(state.db(), id, req).await?;
    Ok(Json(provider))
}

/// DELETE /prestador/:id
pub async fn delete_provider(
    State(state): State<AppState>,
    Extension(operator): Extension<Operator>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<MessageResponse>> {
    debug!(operator = %operator.user, provider_id = id, "Deleting provider");
    let message = ProviderService::delete(state.db(), id).await?;
    Ok(Json(message))
}

/// GET /prestador/categoria/:id
///
/// The id stays a string so a non-numeric value yields an empty list.
pub async fn list_providers_by_category(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<Json<Vec<ProviderResponse>>> {
    let providers = ProviderService::list_by_category(state.db(), &id).await?;
    Ok(Json(providers))
}

/// GET /prestador/servico/:nome
pub async fn list_providers_by_service(
    State(state): State<AppState>,
    ApiPath(nome): ApiPath<String>,
) -> ApiResult<Json<Vec<ProviderResponse>>> {
    let providers = ProviderService::list_by_service_name(state.db(), &nome).await?;
    Ok(Json(providers))
}
