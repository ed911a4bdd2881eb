//! Typed error enum for the service layer.

use flavors_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, not found, constraint, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided input that cannot be used.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(StorageError::NotFound { .. }))
    }
}

impl From<flavors_core::InvalidFlavorId> for ServiceError {
    fn from(err: flavors_core::InvalidFlavorId) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
