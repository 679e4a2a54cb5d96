//! Item row model.

use chrono::{DateTime, Utc};
use itemservice_core::item::Item;
use itemservice_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ItemRow {
    pub id: DbId,
    pub name: String,
    pub price: Option<i32>,
    pub quantity: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: Some(row.id),
            name: row.name,
            price: row.price,
            quantity: row.quantity,
        }
    }
}
