//! Storage trait abstraction.

use async_trait::async_trait;
use flavors_core::{Flavor, FlavorId, FlavorInput};

use crate::error::StorageError;

/// Operations over the `flavors` table. Each call is a single statement.
#[async_trait]
pub trait FlavorStore: Send + Sync {
    /// Drop the table if present and recreate it empty.
    async fn reset_schema(&self) -> Result<(), StorageError>;

    /// Insert the fixed seed rows. Returns the number of rows inserted.
    async fn seed(&self) -> Result<u64, StorageError>;

    /// All rows, most recently created first.
    async fn list_flavors(&self) -> Result<Vec<Flavor>, StorageError>;

    async fn get_flavor(&self, id: FlavorId) -> Result<Option<Flavor>, StorageError>;

    /// Insert a row; storage assigns `id`, `created_at` and `updated_at`.
    async fn create_flavor(&self, input: &FlavorInput) -> Result<Flavor, StorageError>;

    /// Replace `name` and `is_favorite` and refresh `updated_at`.
    /// Returns `None` when no row has this id.
    async fn update_flavor(
        &self,
        id: FlavorId,
        input: &FlavorInput,
    ) -> Result<Option<Flavor>, StorageError>;

    /// Returns `true` if a row was removed.
    async fn delete_flavor(&self, id: FlavorId) -> Result<bool, StorageError>;
}
