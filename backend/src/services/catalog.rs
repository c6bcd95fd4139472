//! Service catalog: creation, deletion and pricing of services
//!
//! The price a client sees is always [`derived_price`] of the owning
//! provider's experience as read in the same query, never the stored base
//! value. Nothing is cached, so a provider update reprices all of its
//! services on the next read.

use crate::error::ApiError;
use crate::repositories::{CreateService, ServiceRecord, ServiceRepository};
use provider_registry_shared::{
    derived_price, pricing::base_price, CreateServiceRequest, MessageResponse, ServiceResponse,
};
use sqlx::SqlitePool;
use tracing::info;
use validator::Validate;

/// Service catalog business logic
pub struct ServiceCatalog;

impl ServiceCatalog {
    /// Create a service for a provider
    ///
    /// The provider reference is not checked before insert; a dangling
    /// service is priced at the base value.
    pub async fn create(
        pool: &SqlitePool,
        req: CreateServiceRequest,
    ) -> Result<ServiceResponse, ApiError> {
        req.validate()?;

        let mut tx = pool.begin().await?;

        let record = ServiceRepository::create(
            &mut *tx,
            CreateService {
                nome_servico: req.nome_servico,
                codigo_prestador: req.codigo_prestador,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        tx.commit().await?;

        info!(
            service_id = record.id_servico,
            provider_id = record.codigo_prestador,
            "Service created"
        );
        Ok(Self::to_response(record))
    }

    /// Delete a single service
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<MessageResponse, ApiError> {
        let mut tx = pool.begin().await?;

        if !ServiceRepository::delete(&mut *tx, id)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::NotFound("Não encontrado!".to_string()));
        }

        tx.commit().await?;

        info!(service_id = id, "Service deleted");
        Ok(MessageResponse::new(format!(
            "Serviço {} removido com sucesso!",
            id
        )))
    }

    /// Price a service row for display
    pub fn to_response(record: ServiceRecord) -> ServiceResponse {
        let price = record
            .provider_experience
            .map(derived_price)
            .unwrap_or_else(base_price);

        ServiceResponse {
            id_servico: record.id_servico,
            nome_servico: record.nome_servico,
            vlr_servico: price,
            codigo_prestador: record.codigo_prestador,
        }
    }
}
