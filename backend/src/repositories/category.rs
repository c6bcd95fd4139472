//! Category repository for database operations

use anyhow::Result;
use sqlx::SqliteConnection;

/// Category record from database
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CategoryRecord {
    pub id_categoria: i64,
    pub nome_categoria: String,
}

/// Category repository
pub struct CategoryRepository;

impl CategoryRepository {
    /// Insert a category
    pub async fn create(conn: &mut SqliteConnection, name: &str) -> Result<CategoryRecord> {
        let record = sqlx::query_as::<_, CategoryRecord>(
            r#"
            INSERT INTO categoria (nome_categoria)
            VALUES (?)
            RETURNING id_categoria, nome_categoria
            "#,
        )
        .bind(name)
        .fetch_one(conn)
        .await?;

        Ok(record)
    }

    /// All categories ordered by id
    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<CategoryRecord>> {
        let records = sqlx::query_as::<_, CategoryRecord>(
            r#"
            SELECT id_categoria, nome_categoria
            FROM categoria
            ORDER BY id_categoria
            "#,
        )
        .fetch_all(conn)
        .await?;

        Ok(records)
    }

    pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Option<CategoryRecord>> {
        let record = sqlx::query_as::<_, CategoryRecord>(
            r#"
            SELECT id_categoria, nome_categoria
            FROM categoria
            WHERE id_categoria = ?
            "#,
        )
        .bind(id)
        .fetch_optional(conn)
        .await?;

        Ok(record)
    }

    /// Number of providers still referencing a category
    pub async fn count_providers(conn: &mut SqliteConnection, id: i64) -> Result<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM prestador WHERE id_categoria = ?"#)
                .bind(id)
                .fetch_one(conn)
                .await?;

        Ok(count)
    }

    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool> {
        let result = sqlx::query(r#"DELETE FROM categoria WHERE id_categoria = ?"#)
            .bind(id)
            .execute(conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
