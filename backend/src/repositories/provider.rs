//! Provider repository for database operations

use anyhow::Result;
use sqlx::SqliteConnection;

/// Provider record from database
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ProviderRecord {
    pub codigo_prestador: i64,
    pub nome_prestador: String,
    pub tempo_experiencia: i64,
    pub id_categoria: i64,
}

/// Input for creating a provider
#[derive(Debug, Clone)]
pub struct CreateProvider {
    pub nome_prestador: String,
    pub tempo_experiencia: i64,
    pub id_categoria: i64,
}

/// Partial update; `None` leaves the column unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateProvider {
    pub nome_prestador: Option<String>,
    pub tempo_experiencia: Option<i64>,
    pub id_categoria: Option<i64>,
}

/// Provider repository
pub struct ProviderRepository;

impl ProviderRepository {
    /// Insert a provider. The category reference is not checked here.
    pub async fn create(conn: &mut SqliteConnection, input: CreateProvider) -> Result<ProviderRecord> {
        let record = sqlx::query_as::<_, ProviderRecord>(
            r#"
            INSERT INTO prestador (nome_prestador, tempo_experiencia, id_categoria)
            VALUES (?, ?, ?)
            RETURNING codigo_prestador, nome_prestador, tempo_experiencia, id_categoria
            "#,
        )
        .bind(&input.nome_prestador)
        .bind(input.tempo_experiencia)
        .bind(input.id_categoria)
        .fetch_one(conn)
        .await?;

        Ok(record)
    }

    /// All providers ordered by id
    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<ProviderRecord>> {
        let records = sqlx::query_as::<_, ProviderRecord>(
            r#"
            SELECT codigo_prestador, nome_prestador, tempo_experiencia, id_categoria
            FROM prestador
            ORDER BY codigo_prestador
            "#,
        )
        .fetch_all(conn)
        .await?;

        Ok(records)
    }

    pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Option<ProviderRecord>> {
        let record = sqlx::query_as::<_, ProviderRecord>(
            r#"
            SELECT codigo_prestador, nome_prestador, tempo_experiencia, id_categoria
            FROM prestador
            WHERE codigo_prestador = ?
            "#,
        )
        .bind(id)
        .fetch_optional(conn)
        .await?;

        Ok(record)
    }

    /// Providers in a category (exact match)
    pub async fn list_by_category(
        conn: &mut SqliteConnection,
        category_id: i64,
    ) -> Result<Vec<ProviderRecord>> {
        let records = sqlx::query_as::<_, ProviderRecord>(
            r#"
            SELECT codigo_prestador, nome_prestador, tempo_experiencia, id_categoria
            FROM prestador
            WHERE id_categoria = ?
            ORDER BY codigo_prestador
            "#,
        )
        .bind(category_id)
        .fetch_all(conn)
        .await?;

        Ok(records)
    }

    /// Providers with at least one service whose name matches a `LIKE`
    /// pattern. Each provider appears once.
    pub async fn list_by_service_name(
        conn: &mut SqliteConnection,
        pattern: &str,
    ) -> Result<Vec<ProviderRecord>> {
        let records = sqlx::query_as::<_, ProviderRecord>(
            r#"
            SELECT DISTINCT p.codigo_prestador, p.nome_prestador, p.tempo_experiencia, p.id_categoria
            FROM prestador p
            JOIN servico s ON s.codigo_prestador = p.codigo_prestador
            WHERE s.nome_servico LIKE ?
            ORDER BY p.codigo_prestador
            "#,
        )
        .bind(pattern)
        .fetch_all(conn)
        .await?;

        Ok(records)
    }

    /// Apply a partial update and return the resulting row, or `None` if
    /// the provider does not exist
    pub async fn update(
        conn: &mut SqliteConnection,
        id: i64,
        input: UpdateProvider,
    ) -> Result<Option<ProviderRecord>> {
        let record = sqlx::query_as::<_, ProviderRecord>(
            r#"
            UPDATE prestador SET
                nome_prestador = COALESCE(?, nome_prestador),
                tempo_experiencia = COALESCE(?, tempo_experiencia),
                id_categoria = COALESCE(?, id_categoria)
            WHERE codigo_prestador = ?
            RETURNING codigo_prestador, nome_prestador, tempo_experiencia, id_categoria
            "#,
        )
        .bind(input.nome_prestador)
        .bind(input.tempo_experiencia)
        .bind(input.id_categoria)
        .bind(id)
        .fetch_optional(conn)
        .await?;

        Ok(record)
    }

    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool> {
        let result = sqlx::query(r#"DELETE FROM prestador WHERE codigo_prestador = ?"#)
            .bind(id)
            .execute(conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
