//! Category service

use crate::error::ApiError;
use crate::repositories::{CategoryRecord, CategoryRepository};
use provider_registry_shared::{CategoryResponse, CreateCategoryRequest, MessageResponse};
use sqlx::SqlitePool;
use tracing::info;
use validator::Validate;

/// Category business logic
pub struct CategoryService;

impl CategoryService {
    pub async fn create(
        pool: &SqlitePool,
        req: CreateCategoryRequest,
    ) -> Result<CategoryResponse, ApiError> {
        req.validate()?;

        let mut tx = pool.begin().await?;
        let record = CategoryRepository::create(&mut *tx, &req.nome_categoria)
            .await
            .map_err(ApiError::Internal)?;
        tx.commit().await?;

        info!(category_id = record.id_categoria, "Category created");
        Ok(record.into())
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<CategoryResponse>, ApiError> {
        let mut conn = pool.acquire().await?;
        let records = CategoryRepository::list(&mut *conn)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Delete a category that no provider references
    ///
    /// Fails with `Conflict` and leaves everything untouched while any
    /// provider still points at it.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<MessageResponse, ApiError> {
        let mut tx = pool.begin().await?;

        CategoryRepository::find_by_id(&mut *tx, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Não encontrada!".to_string()))?;

        let providers = CategoryRepository::count_providers(&mut *tx, id)
            .await
            .map_err(ApiError::Internal)?;
        if providers > 0 {
            return Err(ApiError::Conflict(
                "Não é possível deletar! Existem prestadores nesta categoria.".to_string(),
            ));
        }

        CategoryRepository::delete(&mut *tx, id)
            .await
            .map_err(ApiError::Internal)?;
        tx.commit().await?;

        info!(category_id = id, "Category deleted");
        Ok(MessageResponse::new(format!(
            "Categoria {} deletada com sucesso!",
            id
        )))
    }
}

impl From<CategoryRecord> for CategoryResponse {
    fn from(record: CategoryRecord) -> Self {
        Self {
            id_categoria: record.id_categoria,
            nome_categoria: record.nome_categoria,
        }
    }
}
