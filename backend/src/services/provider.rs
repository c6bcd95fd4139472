//! Provider service
//!
//! Providers are returned with their services (priced) and their category
//! nested. Deleting a provider first deletes its services in the same
//! transaction, so no service is ever left pointing at a missing provider.

use crate::error::ApiError;
use crate::repositories::{
    CategoryRepository, CreateProvider, ProviderRecord, ProviderRepository, ServiceRepository,
    UpdateProvider,
};
use crate::services::ServiceCatalog;
use provider_registry_shared::{
    validation::{parse_lookup_id, substring_pattern},
    CategoryResponse, CreateProviderRequest, MessageResponse, ProviderResponse,
    UpdateProviderRequest,
};
use sqlx::{SqliteConnection, SqlitePool};
use std::collections::HashMap;
use tracing::info;
use validator::Validate;

/// Provider business logic
pub struct ProviderService;

impl ProviderService {
    /// Create a provider
    ///
    /// The category reference is not checked before insert.
    pub async fn create(
        pool: &SqlitePool,
        req: CreateProviderRequest,
    ) -> Result<ProviderResponse, ApiError> {
        req.validate()?;

        let mut tx = pool.begin().await?;

        let record = ProviderRepository::create(
            &mut *tx,
            CreateProvider {
                nome_prestador: req.nome_prestador,
                tempo_experiencia: req.tempo_experiencia,
                id_categoria: req.id_categoria,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        let response = Self::assemble_one(&mut *tx, record).await?;
        tx.commit().await?;

        info!(
            provider_id = response.codigo_prestador,
            category_id = response.id_categoria,
            "Provider created"
        );
        Ok(response)
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<ProviderResponse>, ApiError> {
        let mut conn = pool.acquire().await?;
        let records = ProviderRepository::list(&mut *conn)
            .await
            .map_err(ApiError::Internal)?;

        Self::assemble(&mut *conn, records).await
    }

    /// Providers whose category id equals `raw_category_id`
    ///
    /// A non-numeric id matches nothing.
    pub async fn list_by_category(
        pool: &SqlitePool,
        raw_category_id: &str,
    ) -> Result<Vec<ProviderResponse>, ApiError> {
        let Some(category_id) = parse_lookup_id(raw_category_id) else {
            return Ok(Vec::new());
        };

        let mut conn = pool.acquire().await?;
        let records = ProviderRepository::list_by_category(&mut *conn, category_id)
            .await
            .map_err(ApiError::Internal)?;

        Self::assemble(&mut *conn, records).await
    }

    /// Providers with a service whose name contains `term` (case-sensitive)
    pub async fn list_by_service_name(
        pool: &SqlitePool,
        term: &str,
    ) -> Result<Vec<ProviderResponse>, ApiError> {
        let mut conn = pool.acquire().await?;
        let records = ProviderRepository::list_by_service_name(&mut *conn, &substring_pattern(term))
            .await
            .map_err(ApiError::Internal)?;

        Self::assemble(&mut *conn, records).await
    }

    /// Apply any subset of name/experience/category
    ///
    /// An unknown id is reported before the body is validated.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        req: UpdateProviderRequest,
    ) -> Result<ProviderResponse, ApiError> {
        let mut tx = pool.begin().await?;

        ProviderRepository::find_by_id(&mut *tx, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Não encontrado!".to_string()))?;

        req.validate()?;

        let record = ProviderRepository::update(
            &mut *tx,
            id,
            UpdateProvider {
                nome_prestador: req.nome_prestador,
                tempo_experiencia: req.tempo_experiencia,
                id_categoria: req.id_categoria,
            },
        )
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Não encontrado!".to_string()))?;

        let response = Self::assemble_one(&mut *tx, record).await?;
        tx.commit().await?;

        info!(provider_id = id, "Provider updated");
        Ok(response)
    }

    /// Delete a provider together with all of its services
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<MessageResponse, ApiError> {
        let mut tx = pool.begin().await?;

        ProviderRepository::find_by_id(&mut *tx, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Não encontrado!".to_string()))?;

        let services = ServiceRepository::delete_by_provider(&mut *tx, id)
            .await
            .map_err(ApiError::Internal)?;
        ProviderRepository::delete(&mut *tx, id)
            .await
            .map_err(ApiError::Internal)?;

        tx.commit().await?;

        info!(provider_id = id, services_deleted = services, "Provider deleted");
        Ok(MessageResponse::new("Prestador deletado com sucesso!"))
    }

    async fn assemble_one(
        conn: &mut SqliteConnection,
        record: ProviderRecord,
    ) -> Result<ProviderResponse, ApiError> {
        Self::assemble(conn, vec![record])
            .await?
            .pop()
            .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("Provider assembly returned nothing")))
    }

    /// Attach priced services and the category to each provider, keeping
    /// the input order
    async fn assemble(
        conn: &mut SqliteConnection,
        records: Vec<ProviderRecord>,
    ) -> Result<Vec<ProviderResponse>, ApiError> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = records.iter().map(|r| r.codigo_prestador).collect();

        let mut services_by_provider: HashMap<i64, Vec<_>> = HashMap::new();
        for service in ServiceRepository::list_by_providers(&mut *conn, &ids)
            .await
            .map_err(ApiError::Internal)?
        {
            services_by_provider
                .entry(service.codigo_prestador)
                .or_default()
                .push(ServiceCatalog::to_response(service));
        }

        let categories: HashMap<i64, CategoryResponse> = CategoryRepository::list(&mut *conn)
            .await
            .map_err(ApiError::Internal)?
            .into_iter()
            .map(|c| (c.id_categoria, CategoryResponse::from(c)))
            .collect();

        Ok(records
            .into_iter()
            .map(|r| ProviderResponse {
                servicos: services_by_provider
                    .remove(&r.codigo_prestador)
                    .unwrap_or_default(),
                categoria: categories.get(&r.id_categoria).cloned(),
                codigo_prestador: r.codigo_prestador,
                nome_prestador: r.nome_prestador,
                tempo_experiencia: r.tempo_experiencia,
                id_categoria: r.id_categoria,
            })
            .collect())
    }
}
