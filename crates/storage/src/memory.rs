//! In-memory `FlavorStore`, a drop-in stand-in for PostgreSQL in tests.

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use flavors_core::{Flavor, FlavorId, FlavorInput, MAX_NAME_LEN, SEED_FLAVORS};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::FlavorStore;

#[derive(Debug)]
struct Table {
    rows: Vec<Flavor>,
    next_id: i32,
}

impl Table {
    const fn empty() -> Self {
        Self { rows: Vec::new(), next_id: 1 }
    }

    fn insert(&mut self, name: String, is_favorite: bool, now: DateTime<Utc>) -> Flavor {
        let flavor = Flavor {
            id: FlavorId(self.next_id),
            name,
            is_favorite,
            created_at: now,
            updated_at: now,
        };
        self.next_id += 1;
        self.rows.push(flavor.clone());
        flavor
    }
}

/// Mirrors the column constraints of the `flavors` table.
fn checked_name(input: &FlavorInput) -> Result<String, StorageError> {
    let name = input.name.as_ref().ok_or_else(|| {
        StorageError::Constraint("null value in column \"name\" violates not-null constraint".into())
    })?;
    if name.chars().count() > MAX_NAME_LEN {
        return Err(StorageError::Constraint(format!(
            "value too long for type character varying({MAX_NAME_LEN})"
        )));
    }
    Ok(name.clone())
}

/// `updated_at` must move strictly forward even if the clock has not ticked.
fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous { now } else { previous + TimeDelta::microseconds(1) }
}

#[derive(Debug)]
pub struct MemoryStorage {
    table: RwLock<Table>,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self { table: RwLock::new(Table::empty()) }
    }
}

#[async_trait]
impl FlavorStore for MemoryStorage {
    async fn reset_schema(&self) -> Result<(), StorageError> {
        *self.table.write().await = Table::empty();
        Ok(())
    }

    async fn seed(&self) -> Result<u64, StorageError> {
        // One statement, one timestamp for every seed row.
        let now = Utc::now();
        let mut table = self.table.write().await;
        for (name, is_favorite) in SEED_FLAVORS {
            table.insert(name.to_owned(), is_favorite, now);
        }
        Ok(SEED_FLAVORS.len() as u64)
    }

    async fn list_flavors(&self) -> Result<Vec<Flavor>, StorageError> {
        let mut rows = self.table.read().await.rows.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(rows)
    }

    async fn get_flavor(&self, id: FlavorId) -> Result<Option<Flavor>, StorageError> {
        Ok(self.table.read().await.rows.iter().find(|f| f.id == id).cloned())
    }

    async fn create_flavor(&self, input: &FlavorInput) -> Result<Flavor, StorageError> {
        let name = checked_name(input)?;
        Ok(self.table.write().await.insert(name, input.is_favorite_or_default(), Utc::now()))
    }

    async fn update_flavor(
        &self,
        id: FlavorId,
        input: &FlavorInput,
    ) -> Result<Option<Flavor>, StorageError> {
        let mut table = self.table.write().await;
        let Some(row) = table.rows.iter_mut().find(|f| f.id == id) else {
            return Ok(None);
        };
        let name = checked_name(input)?;
        row.name = name;
        row.is_favorite = input.is_favorite_or_default();
        row.updated_at = next_timestamp(row.updated_at);
        Ok(Some(row.clone()))
    }

    async fn delete_flavor(&self, id: FlavorId) -> Result<bool, StorageError> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|f| f.id != id);
        Ok(table.rows.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded() -> MemoryStorage {
        let store = MemoryStorage::new();
        store.reset_schema().await.unwrap();
        store.seed().await.unwrap();
        store
    }

    #[tokio::test]
    async fn seed_inserts_fixed_rows_in_order() {
        let store = seeded().await;
        let rows = store.list_flavors().await.unwrap();
        let names: Vec<_> = rows.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Vanilla", "Chocolate", "Strawberry", "Mint Chocolate Chip"]);
        let ids: Vec<_> = rows.iter().map(|f| f.id.get()).collect();
        assert_eq!(ids, [1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn reset_restarts_identifiers() {
        let store = seeded().await;
        store.create_flavor(&FlavorInput::new("Pistachio", true)).await.unwrap();
        store.reset_schema().await.unwrap();
        assert!(store.list_flavors().await.unwrap().is_empty());
        let created = store.create_flavor(&FlavorInput::new("Mango", false)).await.unwrap();
        assert_eq!(created.id, FlavorId(1));
    }

    #[tokio::test]
    async fn create_rejects_missing_and_oversized_names() {
        let store = seeded().await;
        let missing = store.create_flavor(&FlavorInput::default()).await.unwrap_err();
        assert!(matches!(missing, StorageError::Constraint(_)));

        let long = FlavorInput::new("x".repeat(MAX_NAME_LEN + 1), false);
        let too_long = store.create_flavor(&long).await.unwrap_err();
        assert!(matches!(too_long, StorageError::Constraint(_)));

        assert_eq!(store.list_flavors().await.unwrap().len(), SEED_FLAVORS.len());
    }

    #[tokio::test]
    async fn update_advances_updated_at_only() {
        let store = seeded().await;
        let before = store.get_flavor(FlavorId(3)).await.unwrap().unwrap();
        let after = store
            .update_flavor(FlavorId(3), &FlavorInput::new("Wild Strawberry", true))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(after.name, "Wild Strawberry");
        assert!(after.is_favorite);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at > before.updated_at);
    }

    #[tokio::test]
    async fn failed_update_leaves_row_untouched() {
        let store = seeded().await;
        let before = store.get_flavor(FlavorId(1)).await.unwrap().unwrap();
        let err = store.update_flavor(FlavorId(1), &FlavorInput::default()).await.unwrap_err();
        assert!(matches!(err, StorageError::Constraint(_)));
        assert_eq!(store.get_flavor(FlavorId(1)).await.unwrap().unwrap(), before);

        let missing = store.update_flavor(FlavorId(99), &FlavorInput::new("Nope", false)).await;
        assert!(missing.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed() {
        let store = seeded().await;
        assert!(store.delete_flavor(FlavorId(2)).await.unwrap());
        assert!(!store.delete_flavor(FlavorId(2)).await.unwrap());
        assert!(store.get_flavor(FlavorId(2)).await.unwrap().is_none());
    }
}
