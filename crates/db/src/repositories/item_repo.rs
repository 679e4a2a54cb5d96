//! Repository for the `items` table.

use itemservice_core::item::Item;
use itemservice_core::types::DbId;
use sqlx::PgPool;

use crate::models::item::ItemRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, price, quantity, created_at, updated_at";

/// Provides CRUD operations for items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item, returning the created row. Any `id` on the input
    /// is ignored.
    pub async fn create(pool: &PgPool, input: &Item) -> Result<ItemRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO items (name, price, quantity)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ItemRow>(&query)
            .bind(&input.name)
            .bind(input.price)
            .bind(input.quantity)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ItemRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        sqlx::query_as::<_, ItemRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all items in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<ItemRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items ORDER BY id ASC");
        sqlx::query_as::<_, ItemRow>(&query).fetch_all(pool).await
    }

    /// Overwrite name, price and quantity. `None` values are written as NULL.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &Item,
    ) -> Result<Option<ItemRow>, sqlx::Error> {
        let query = format!(
            "UPDATE items SET
                name = $2,
                price = $3,
                quantity = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ItemRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.price)
            .bind(input.quantity)
            .fetch_optional(pool)
            .await
    }
}
