//! Service repository for database operations
//!
//! Reads join the owning provider so the caller can derive the visible
//! price from the provider's current experience.

use anyhow::Result;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

/// Service record joined with its provider's experience
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ServiceRecord {
    pub id_servico: i64,
    pub nome_servico: String,
    /// Stored base value; not what clients see
    pub vlr_servico: f64,
    pub codigo_prestador: i64,
    /// `None` when the provider reference dangles
    pub provider_experience: Option<i64>,
}

/// Input for creating a service
#[derive(Debug, Clone)]
pub struct CreateService {
    pub nome_servico: String,
    pub codigo_prestador: i64,
}

const SELECT_SERVICE: &str = r#"
    SELECT s.id_servico, s.nome_servico, s.vlr_servico, s.codigo_prestador,
           p.tempo_experiencia AS provider_experience
    FROM servico s
    LEFT JOIN prestador p ON p.codigo_prestador = s.codigo_prestador
"#;

/// Most provider ids bound into one `IN (...)` list
pub const PROVIDER_ID_CHUNK: usize = 500;

/// Service repository
pub struct ServiceRepository;

impl ServiceRepository {
    /// Insert a service with the default base value and return it joined
    /// with its provider. The provider reference is not checked here.
    pub async fn create(conn: &mut SqliteConnection, input: CreateService) -> Result<ServiceRecord> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO servico (nome_servico, codigo_prestador)
            VALUES (?, ?)
            RETURNING id_servico
            "#,
        )
        .bind(&input.nome_servico)
        .bind(input.codigo_prestador)
        .fetch_one(&mut *conn)
        .await?;

        Self::find_by_id(conn, id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Service {} vanished after insert", id))
    }

    pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Option<ServiceRecord>> {
        let record = sqlx::query_as::<_, ServiceRecord>(&format!(
            "{} WHERE s.id_servico = ?",
            SELECT_SERVICE
        ))
        .bind(id)
        .fetch_optional(conn)
        .await?;

        Ok(record)
    }

    /// Services belonging to any of `provider_ids`, ordered by id
    ///
    /// Ids are bound in chunks of [`PROVIDER_ID_CHUNK`] to stay under
    /// SQLite's bound-variable limit.
    pub async fn list_by_providers(
        conn: &mut SqliteConnection,
        provider_ids: &[i64],
    ) -> Result<Vec<ServiceRecord>> {
        let mut records = Vec::new();

        for chunk in provider_ids.chunks(PROVIDER_ID_CHUNK) {
            let mut builder = QueryBuilder::<Sqlite>::new(SELECT_SERVICE);
            builder.push(" WHERE s.codigo_prestador IN (");
            let mut separated = builder.separated(", ");
            for id in chunk {
                separated.push_bind(*id);
            }
            separated.push_unseparated(")");

            records.extend(
                builder
                    .build_query_as::<ServiceRecord>()
                    .fetch_all(&mut *conn)
                    .await?,
            );
        }

        records.sort_by_key(|r| r.id_servico);
        Ok(records)
    }

    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool> {
        let result = sqlx::query(r#"DELETE FROM servico WHERE id_servico = ?"#)
            .bind(id)
            .execute(conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every service of a provider; returns how many were removed
    pub async fn delete_by_provider(conn: &mut SqliteConnection, provider_id: i64) -> Result<u64> {
        let result = sqlx::query(r#"DELETE FROM servico WHERE codigo_prestador = ?"#)
            .bind(provider_id)
            .execute(conn)
            .await?;

        Ok(result.rows_affected())
    }
}
