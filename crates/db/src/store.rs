//! [`ItemStore`] implementation over [`ItemRepo`].

use async_trait::async_trait;
use itemservice_core::error::CoreError;
use itemservice_core::item::Item;
use itemservice_core::store::{ItemStore, ITEM_ENTITY};
use itemservice_core::types::DbId;

use crate::repositories::ItemRepo;
use crate::DbPool;

/// Record store persisting items in Postgres.
#[derive(Debug, Clone)]
pub struct PgItemStore {
    pool: DbPool,
}

impl PgItemStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

fn internal(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Item store query failed");
    CoreError::Internal(format!("Database error: {err}"))
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: ITEM_ENTITY,
        id,
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn find_all(&self) -> Result<Vec<Item>, CoreError> {
        let rows = ItemRepo::list(&self.pool).await.map_err(internal)?;
        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Item, CoreError> {
        ItemRepo::find_by_id(&self.pool, id)
            .await
            .map_err(internal)?
            .map(Item::from)
            .ok_or_else(|| not_found(id))
    }

    async fn create(&self, item: Item) -> Result<Item, CoreError> {
        let row = ItemRepo::create(&self.pool, &item).await.map_err(internal)?;
        Ok(row.into())
    }

    async fn update(&self, id: DbId, item: Item) -> Result<(), CoreError> {
        ItemRepo::update(&self.pool, id, &item)
            .await
            .map_err(internal)?
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool).await.map_err(internal)
    }
}
