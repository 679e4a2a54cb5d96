//! Add/edit flow control for items.
//!
//! An add submission moves `Empty -> Submitted -> {Invalid, Valid}`; Invalid
//! goes back to the form with its outcome attached, Valid is persisted and
//! ends in a redirect to the detail view. Nothing is written unless
//! validation passed, so there is nothing to roll back.

use std::sync::Arc;

use crate::error::CoreError;
use crate::item::Item;
use crate::store::ItemStore;
use crate::types::DbId;
use crate::validation::codes::MessageCodesResolver;
use crate::validation::validator::Validator;
use crate::validation::violation::ValidationOutcome;

/// What the presentation layer should do next.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowResult {
    /// Re-render the form with the submitted values and the violations.
    ShowFormAgain {
        item: Item,
        outcome: ValidationOutcome,
    },
    /// Navigate to the item's detail view.
    RedirectToDetail { id: DbId, just_created: bool },
}

/// Orchestrates item submissions against a store and a validator.
///
/// Holds no per-request state; one instance serves concurrent submissions.
#[derive(Clone)]
pub struct ItemFlow {
    store: Arc<dyn ItemStore>,
    validator: Arc<dyn Validator<Item>>,
    codes: MessageCodesResolver,
}

impl ItemFlow {
    pub fn new(store: Arc<dyn ItemStore>, validator: Arc<dyn Validator<Item>>) -> Self {
        Self {
            store,
            validator,
            codes: MessageCodesResolver::default(),
        }
    }

    /// Use `codes` to build message-code families for violations.
    pub fn with_codes_resolver(mut self, codes: MessageCodesResolver) -> Self {
        self.codes = codes;
        self
    }

    /// Whether the underlying store is reachable.
    pub async fn health_check(&self) -> Result<(), CoreError> {
        self.store.health_check().await
    }

    /// Empty record backing the "add" form.
    pub fn add_form(&self) -> Item {
        Item::default()
    }

    pub async fn list_items(&self) -> Result<Vec<Item>, CoreError> {
        self.store.find_all().await
    }

    pub async fn find_item(&self, id: DbId) -> Result<Item, CoreError> {
        self.store.find_by_id(id).await
    }

    /// Current values backing the "edit" form.
    pub async fn edit_form(&self, id: DbId) -> Result<Item, CoreError> {
        self.store.find_by_id(id).await
    }

    /// Validate a new item and persist it only if every rule passed.
    pub async fn submit_new_item(&self, candidate: Item) -> Result<FlowResult, CoreError> {
        let outcome = self.validator.validate_with(&candidate, self.codes.clone());
        if outcome.has_errors() {
            tracing::info!(errors = ?outcome.violations, "Item submission rejected");
            return Ok(FlowResult::ShowFormAgain {
                item: candidate,
                outcome,
            });
        }

        let saved = self.store.create(candidate).await?;
        let id = saved.id.ok_or_else(|| {
            CoreError::Internal("Store returned an item without an id".to_string())
        })?;
        tracing::info!(item_id = id, "Item created");

        Ok(FlowResult::RedirectToDetail {
            id,
            just_created: true,
        })
    }

    /// Replace an existing item's values. Edits are not validated.
    ///
    /// Returns the id of the detail view to redirect to.
    pub async fn submit_edit(&self, id: DbId, updated: Item) -> Result<DbId, CoreError> {
        self.store.update(id, updated).await?;
        tracing::info!(item_id = id, "Item updated");
        Ok(id)
    }
}
