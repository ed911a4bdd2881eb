use std::sync::Arc;

use flavors_core::{Flavor, FlavorId, FlavorInput};
use flavors_storage::{FlavorStore, StorageBackend, StorageError};

use crate::ServiceError;

const ENTITY: &str = "flavor";

pub struct FlavorService {
    storage: Arc<StorageBackend>,
}

impl FlavorService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    /// Drops and recreates the table, then inserts the seed rows.
    ///
    /// Run once before the server accepts connections; any failure is fatal.
    pub async fn initialize(&self) -> Result<u64, ServiceError> {
        self.storage.reset_schema().await?;
        let seeded = self.storage.seed().await?;
        tracing::info!(seeded, "flavors initialized");
        Ok(seeded)
    }

    pub async fn list(&self) -> Result<Vec<Flavor>, ServiceError> {
        Ok(self.storage.list_flavors().await?)
    }

    pub async fn get(&self, id: FlavorId) -> Result<Flavor, ServiceError> {
        self.storage
            .get_flavor(id)
            .await?
            .ok_or_else(|| StorageError::not_found(ENTITY, id).into())
    }

    pub async fn create(&self, input: FlavorInput) -> Result<Flavor, ServiceError> {
        let flavor = self.storage.create_flavor(&input).await?;
        tracing::debug!(id = %flavor.id, name = %flavor.name, "flavor created");
        Ok(flavor)
    }

    /// Full replacement of `name` and `is_favorite`.
    pub async fn update(&self, id: FlavorId, input: FlavorInput) -> Result<Flavor, ServiceError> {
        self.storage
            .update_flavor(id, &input)
            .await?
            .ok_or_else(|| StorageError::not_found(ENTITY, id).into())
    }

    /// Idempotent: deleting a missing id is not an error.
    pub async fn delete(&self, id: FlavorId) -> Result<(), ServiceError> {
        let removed = self.storage.delete_flavor(id).await?;
        tracing::debug!(%id, removed, "flavor delete");
        Ok(())
    }
}
