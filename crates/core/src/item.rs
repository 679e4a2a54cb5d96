//! The item record.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::types::DbId;
use crate::validation::binding::{Bindable, FormField};

/// A catalogue item. `id` stays `None` until the store assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: Option<DbId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: Option<i32>,
    #[serde(default)]
    pub quantity: Option<i32>,
}

impl Item {
    pub fn new(name: impl Into<String>, price: Option<i32>, quantity: Option<i32>) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
            quantity,
        }
    }
}

/// Bindable attributes of [`Item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Name,
    Price,
    Quantity,
}

impl FormField for ItemField {
    fn name(self) -> &'static str {
        match self {
            ItemField::Name => "name",
            ItemField::Price => "price",
            ItemField::Quantity => "quantity",
        }
    }

    fn type_label(self) -> &'static str {
        match self {
            ItemField::Name => "String",
            ItemField::Price | ItemField::Quantity => "i32",
        }
    }
}

impl Bindable for Item {
    type Field = ItemField;
    const OBJECT_NAME: &'static str = "item";

    fn field_value(&self, field: ItemField) -> Value {
        match field {
            ItemField::Name => json!(self.name),
            ItemField::Price => json!(self.price),
            ItemField::Quantity => json!(self.quantity),
        }
    }
}
