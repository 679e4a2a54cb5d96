use std::sync::Arc;

use itemservice_core::flow::ItemFlow;
use itemservice_core::validation::messages::MessageSource;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Add/edit flow over the configured item store.
    pub flow: Arc<ItemFlow>,
    /// Message catalogue used to render violations.
    pub messages: Arc<MessageSource>,
}
