//! PostgreSQL storage backend using sqlx.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use flavors_core::{Flavor, FlavorId, FlavorInput, PG_POOL_MAX_CONNECTIONS};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use crate::error::StorageError;
use crate::schema::{reset_flavors_table, seed_flavors_table};
use crate::traits::FlavorStore;

const FLAVOR_COLUMNS: &str = "id, name, is_favorite, created_at, updated_at";

/// Owns the process-wide database connection.
///
/// The pool is capped at a single connection; every request shares it and
/// holds it for exactly one statement.
#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .connect(database_url)
            .await?;
        tracing::info!("PgStorage connected");
        Ok(Self { pool })
    }

    /// Waits for in-flight statements, then releases the connection.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("PgStorage closed");
    }
}

pub(crate) fn row_to_flavor(row: &PgRow) -> Result<Flavor, StorageError> {
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at")?;
    Ok(Flavor {
        id: FlavorId(row.try_get("id")?),
        name: row.try_get("name")?,
        is_favorite: row.try_get("is_favorite")?,
        created_at,
        updated_at,
    })
}

#[async_trait]
impl FlavorStore for PgStorage {
    async fn reset_schema(&self) -> Result<(), StorageError> {
        reset_flavors_table(&self.pool).await
    }

    async fn seed(&self) -> Result<u64, StorageError> {
        seed_flavors_table(&self.pool).await
    }

    async fn list_flavors(&self) -> Result<Vec<Flavor>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {FLAVOR_COLUMNS} FROM flavors ORDER BY created_at DESC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_flavor).collect()
    }

    async fn get_flavor(&self, id: FlavorId) -> Result<Option<Flavor>, StorageError> {
        let row = sqlx::query(&format!("SELECT {FLAVOR_COLUMNS} FROM flavors WHERE id = $1"))
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_flavor).transpose()
    }

    async fn create_flavor(&self, input: &FlavorInput) -> Result<Flavor, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO flavors (name, is_favorite)
             VALUES ($1, COALESCE($2, false))
             RETURNING {FLAVOR_COLUMNS}"
        ))
        .bind(input.name.as_deref())
        .bind(input.is_favorite)
        .fetch_one(&self.pool)
        .await?;
        row_to_flavor(&row)
    }

    async fn update_flavor(
        &self,
        id: FlavorId,
        input: &FlavorInput,
    ) -> Result<Option<Flavor>, StorageError> {
        let row = sqlx::query(&format!(
            "UPDATE flavors
             SET name = $1, is_favorite = COALESCE($2, false), updated_at = NOW()
             WHERE id = $3
             RETURNING {FLAVOR_COLUMNS}"
        ))
        .bind(input.name.as_deref())
        .bind(input.is_favorite)
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_flavor).transpose()
    }

    async fn delete_flavor(&self, id: FlavorId) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM flavors WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
