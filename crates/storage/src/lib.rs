//! Storage layer for the flavors service.
//!
//! PostgreSQL via sqlx, plus an in-memory store (feature `memory`) that
//! honours the same contract and stands in for the database in tests.

mod backend;
pub mod error;
#[cfg(feature = "memory")]
mod memory;
mod pg_storage;
mod schema;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
#[cfg(feature = "memory")]
pub use memory::MemoryStorage;
pub use pg_storage::PgStorage;
pub use traits::FlavorStore;
