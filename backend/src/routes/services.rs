//! Service routes

use crate::auth::Operator;
use crate::error::ApiResult;
use crate::routes::{ApiJson, ApiPath};
use crate::services::ServiceCatalog;
use crate::state::AppState;
use axum::{extract::State, Extension, Json};
use provider_registry_shared::{CreateServiceRequest, MessageResponse, ServiceResponse};
use tracing::debug;

/// POST /servico
pub async fn create_service(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateServiceRequest>,
) -> ApiResult<Json<ServiceResponse>> {
    let service = ServiceCatalog::create(state.db(), req).await?;
    Ok(Json(service))
}

/// DELETE /servico/:id
pub async fn delete_service(
    State(state): State<AppState>,
    Extension(operator): Extension<Operator>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<MessageResponse>> {
    debug!(operator = %operator.user, service_id = id, "Deleting service");
    let message = ServiceCatalog::delete(state.db(), id).await?;
    Ok(Json(message))
}
