//! Typed error enum for the storage layer.
//!
//! Callers match on `NotFound` versus everything else; every other variant
//! is an opaque storage failure as far as the HTTP surface is concerned.

use thiserror::Error;

/// Storage-layer error covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No row matched the requested identifier.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// Row rejected by a column constraint (NOT NULL, length).
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// SQL / connection failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Dropping, recreating or seeding the table failed.
    #[error("schema error: {0}")]
    Schema(String),
}

impl StorageError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound { entity, id: id.to_string() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Custom `From<sqlx::Error>`, not a blanket `#[from]`.
///
/// - `RowNotFound` → `NotFound` (callers remap with entity context)
/// - SQLSTATE class 23 (integrity) and 22001 (string too long) → `Constraint`
/// - Everything else → `Database`
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound { entity: "row", id: "unknown".into() },
            sqlx::Error::Database(db_err)
                if db_err.code().is_some_and(|c| c.starts_with("23") || c == "22001") =>
            {
                Self::Constraint(db_err.message().to_owned())
            },
            _ => Self::Database(err),
        }
    }
}
