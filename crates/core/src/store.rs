//! Record store abstraction and the in-memory implementation.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreError;
use crate::item::Item;
use crate::types::DbId;

/// Entity name reported in `CoreError::NotFound`.
pub const ITEM_ENTITY: &str = "Item";

/// Persistence for items.
///
/// `create` must assign a unique id atomically and return the stored record.
/// Lookups and updates on an unknown id fail with `CoreError::NotFound`.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Item>, CoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Item, CoreError>;

    async fn create(&self, item: Item) -> Result<Item, CoreError>;

    /// Replace name, price and quantity of the item with `id`.
    async fn update(&self, id: DbId, item: Item) -> Result<(), CoreError>;

    async fn health_check(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

/// Process-local store backed by a sorted map. Ids start at 1.
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    items: RwLock<BTreeMap<DbId, Item>>,
    sequence: AtomicI64,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every item. The id sequence keeps counting.
    pub async fn clear_store(&self) {
        self.items.write().await.clear();
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn find_all(&self) -> Result<Vec<Item>, CoreError> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Item, CoreError> {
        self.items
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(CoreError::NotFound {
                entity: ITEM_ENTITY,
                id,
            })
    }

    async fn create(&self, mut item: Item) -> Result<Item, CoreError> {
        let id = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        item.id = Some(id);
        self.items.write().await.insert(id, item.clone());
        Ok(item)
    }

    async fn update(&self, id: DbId, item: Item) -> Result<(), CoreError> {
        let mut items = self.items.write().await;
        let stored = items.get_mut(&id).ok_or(CoreError::NotFound {
            entity: ITEM_ENTITY,
            id,
        })?;
        stored.name = item.name;
        stored.price = item.price;
        stored.quantity = item.quantity;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let store = MemoryItemStore::new();
        let a = store.create(Item::new("A", Some(1000), Some(10))).await.unwrap();
        let b = store.create(Item::new("B", Some(2000), Some(20))).await.unwrap();
        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
        assert_eq!(store.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn create_ignores_caller_supplied_id() {
        let store = MemoryItemStore::new();
        let mut item = Item::new("A", Some(1000), Some(10));
        item.id = Some(42);
        let saved = store.create(item).await.unwrap();
        assert_eq!(saved.id, Some(1));
        assert_matches!(store.find_by_id(42).await, Err(CoreError::NotFound { id: 42, .. }));
    }

    #[tokio::test]
    async fn find_by_id_round_trips() {
        let store = MemoryItemStore::new();
        let saved = store.create(Item::new("A", Some(1000), Some(10))).await.unwrap();
        let found = store.find_by_id(saved.id.unwrap()).await.unwrap();
        assert_eq!(found, saved);
    }

    #[tokio::test]
    async fn missing_item_is_not_found() {
        let store = MemoryItemStore::new();
        assert_matches!(
            store.find_by_id(7).await,
            Err(CoreError::NotFound { entity: "Item", id: 7 })
        );
    }

    #[tokio::test]
    async fn update_replaces_fields_but_keeps_id() {
        let store = MemoryItemStore::new();
        let saved = store.create(Item::new("A", Some(1000), Some(10))).await.unwrap();
        let id = saved.id.unwrap();

        let mut replacement = Item::new("B", Some(3000), None);
        replacement.id = Some(99);
        store.update(id, replacement).await.unwrap();

        let found = store.find_by_id(id).await.unwrap();
        assert_eq!(found.id, Some(id));
        assert_eq!(found.name, "B");
        assert_eq!(found.price, Some(3000));
        assert_eq!(found.quantity, None);
    }

    #[tokio::test]
    async fn update_of_missing_item_is_not_found() {
        let store = MemoryItemStore::new();
        assert_matches!(
            store.update(3, Item::default()).await,
            Err(CoreError::NotFound { id: 3, .. })
        );
    }

    #[tokio::test]
    async fn clear_store_keeps_sequence() {
        let store = MemoryItemStore::new();
        store.create(Item::new("A", Some(1000), Some(10))).await.unwrap();
        store.clear_store().await;
        assert!(store.find_all().await.unwrap().is_empty());
        let next = store.create(Item::new("B", Some(1000), Some(10))).await.unwrap();
        assert_eq!(next.id, Some(2));
    }
}
