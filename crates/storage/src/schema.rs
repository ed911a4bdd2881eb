//! PostgreSQL schema reset and seed for the `flavors` table.

use flavors_core::SEED_FLAVORS;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::error::StorageError;

/// Drops and recreates the table in one round trip.
const RESET_SQL: &str = r#"
    DROP TABLE IF EXISTS flavors;
    CREATE TABLE flavors (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        is_favorite BOOLEAN NOT NULL DEFAULT false,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    );
"#;

pub(crate) async fn reset_flavors_table(pool: &PgPool) -> Result<(), StorageError> {
    sqlx::raw_sql(RESET_SQL)
        .execute(pool)
        .await
        .map_err(|e| StorageError::Schema(format!("reset flavors table: {e}")))?;
    tracing::info!("flavors table recreated");
    Ok(())
}

pub(crate) async fn seed_flavors_table(pool: &PgPool) -> Result<u64, StorageError> {
    let mut builder: QueryBuilder<'_, Postgres> =
        QueryBuilder::new("INSERT INTO flavors (name, is_favorite) ");
    builder.push_values(SEED_FLAVORS, |mut row, (name, is_favorite)| {
        row.push_bind(name).push_bind(is_favorite);
    });
    let inserted = builder
        .build()
        .execute(pool)
        .await
        .map_err(|e| StorageError::Schema(format!("seed flavors table: {e}")))?
        .rows_affected();
    tracing::info!(rows = inserted, "flavors table seeded");
    Ok(inserted)
}
