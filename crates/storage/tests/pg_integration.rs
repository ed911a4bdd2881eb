//! Integration tests for PgStorage.
//! Run with: DATABASE_URL=... cargo test -p flavors-storage -- --ignored pg_
//!
//! Every test drops and recreates the `flavors` table; point DATABASE_URL at a
//! scratch database.

#![allow(clippy::unwrap_used, reason = "integration test code")]

use flavors_core::{FlavorId, FlavorInput, SEED_FLAVORS};
use flavors_storage::{FlavorStore, PgStorage, StorageError};
use tokio::sync::{Mutex, MutexGuard};

/// Tests share one table, so they run one at a time.
static TABLE_LOCK: Mutex<()> = Mutex::const_new(());

async fn fresh_storage() -> (PgStorage, MutexGuard<'static, ()>) {
    let guard = TABLE_LOCK.lock().await;
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for PgStorage integration tests");
    let storage = PgStorage::connect(&url).await.expect("Failed to connect to PostgreSQL");
    storage.reset_schema().await.unwrap();
    storage.seed().await.unwrap();
    (storage, guard)
}

#[tokio::test]
#[ignore]
async fn pg_seed_lists_four_flavors() {
    let (storage, _guard) = fresh_storage().await;

    let flavors = storage.list_flavors().await.unwrap();
    let listed: Vec<_> = flavors.iter().map(|f| (f.name.as_str(), f.is_favorite)).collect();
    assert_eq!(listed, SEED_FLAVORS);

    storage.close().await;
}

#[tokio::test]
#[ignore]
async fn pg_create_assigns_id_and_timestamps() {
    let (storage, _guard) = fresh_storage().await;

    let created = storage.create_flavor(&FlavorInput::new("Pistachio", true)).await.unwrap();
    assert!(created.id.get() > 0);
    assert_eq!(created.name, "Pistachio");
    assert!(created.is_favorite);
    assert_eq!(created.created_at, created.updated_at);

    let fetched = storage.get_flavor(created.id).await.unwrap();
    assert_eq!(fetched, Some(created.clone()));

    // Newest first.
    let flavors = storage.list_flavors().await.unwrap();
    assert_eq!(flavors.len(), SEED_FLAVORS.len() + 1);
    assert_eq!(flavors[0].id, created.id);

    storage.close().await;
}

#[tokio::test]
#[ignore]
async fn pg_create_defaults_favorite_to_false() {
    let (storage, _guard) = fresh_storage().await;

    let input = FlavorInput { name: Some("Rum Raisin".to_owned()), is_favorite: None };
    let created = storage.create_flavor(&input).await.unwrap();
    assert!(!created.is_favorite);

    storage.close().await;
}

#[tokio::test]
#[ignore]
async fn pg_create_without_name_is_rejected() {
    let (storage, _guard) = fresh_storage().await;

    let err = storage.create_flavor(&FlavorInput::default()).await.unwrap_err();
    assert!(matches!(err, StorageError::Constraint(_)), "unexpected error: {err:?}");
    assert_eq!(storage.list_flavors().await.unwrap().len(), SEED_FLAVORS.len());

    storage.close().await;
}

#[tokio::test]
#[ignore]
async fn pg_update_replaces_fields_and_advances_updated_at() {
    let (storage, _guard) = fresh_storage().await;

    let created = storage.create_flavor(&FlavorInput::new("Pistachio", true)).await.unwrap();
    let updated = storage
        .update_flavor(created.id, &FlavorInput::new("Salted Pistachio", false))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Salted Pistachio");
    assert!(!updated.is_favorite);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    storage.close().await;
}

#[tokio::test]
#[ignore]
async fn pg_update_missing_row_returns_none() {
    let (storage, _guard) = fresh_storage().await;

    let result = storage.update_flavor(FlavorId(999_999), &FlavorInput::new("Ghost", true)).await;
    assert!(result.unwrap().is_none());
    assert!(storage.list_flavors().await.unwrap().iter().all(|f| f.name != "Ghost"));

    storage.close().await;
}

#[tokio::test]
#[ignore]
async fn pg_delete_is_idempotent() {
    let (storage, _guard) = fresh_storage().await;

    let created = storage.create_flavor(&FlavorInput::new("Pistachio", true)).await.unwrap();
    assert!(storage.delete_flavor(created.id).await.unwrap());
    assert!(!storage.delete_flavor(created.id).await.unwrap());
    assert!(storage.get_flavor(created.id).await.unwrap().is_none());
    assert!(storage.get_flavor(FlavorId(0)).await.unwrap().is_none());

    storage.close().await;
}
