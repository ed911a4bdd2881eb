//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use flavors_core::{Flavor, FlavorId, FlavorInput};

use crate::error::StorageError;
use crate::traits::FlavorStore;

macro_rules! dispatch {
    ($self:expr, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Postgres(s) => <crate::PgStorage as FlavorStore>::$method(s, $($arg),*).await,
            #[cfg(feature = "memory")]
            StorageBackend::Memory(s) => <crate::MemoryStorage as FlavorStore>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Debug)]
pub enum StorageBackend {
    Postgres(crate::PgStorage),
    #[cfg(feature = "memory")]
    Memory(crate::MemoryStorage),
}

impl StorageBackend {
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::PgStorage::connect(database_url).await?))
    }

    #[cfg(feature = "memory")]
    pub fn new_memory() -> Self {
        Self::Memory(crate::MemoryStorage::new())
    }

    /// Releases the underlying connection. Safe to call on any backend.
    pub async fn close(&self) {
        match self {
            Self::Postgres(s) => s.close().await,
            #[cfg(feature = "memory")]
            Self::Memory(_) => {},
        }
    }
}

#[async_trait]
impl FlavorStore for StorageBackend {
    async fn reset_schema(&self) -> Result<(), StorageError> {
        dispatch!(self, reset_schema())
    }

    async fn seed(&self) -> Result<u64, StorageError> {
        dispatch!(self, seed())
    }

    async fn list_flavors(&self) -> Result<Vec<Flavor>, StorageError> {
        dispatch!(self, list_flavors())
    }

    async fn get_flavor(&self, id: FlavorId) -> Result<Option<Flavor>, StorageError> {
        dispatch!(self, get_flavor(id))
    }

    async fn create_flavor(&self, input: &FlavorInput) -> Result<Flavor, StorageError> {
        dispatch!(self, create_flavor(input))
    }

    async fn update_flavor(
        &self,
        id: FlavorId,
        input: &FlavorInput,
    ) -> Result<Option<Flavor>, StorageError> {
        dispatch!(self, update_flavor(id, input))
    }

    async fn delete_flavor(&self, id: FlavorId) -> Result<bool, StorageError> {
        dispatch!(self, delete_flavor(id))
    }
}
