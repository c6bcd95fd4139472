//! Category routes

use crate::error::ApiResult;
use crate::routes::{ApiJson, ApiPath};
use crate::services::CategoryService;
use crate::state::AppState;
use axum::{extract::State, Json};
use provider_registry_shared::{CategoryResponse, CreateCategoryRequest, MessageResponse};

/// POST /categoria
pub async fn create_category(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateCategoryRequest>,
) -> ApiResult<Json<CategoryResponse>> {
    let category = CategoryService::create(state.db(), req).await?;
    Ok(Json(category))
}

/// GET /categoria
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Json<Vec<CategoryResponse>>> {
    let categories = CategoryService::list(state.db()).await?;
    Ok(Json(categories))
}

/// DELETE /categoria/:id
pub async fn delete_category(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<MessageResponse>> {
    let message = CategoryService::delete(state.db(), id).await?;
    Ok(Json(message))
}
