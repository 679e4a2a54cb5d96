pub mod health;
pub mod items;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /items                      list
/// /items/add                  add form (GET), submit new item (POST)
/// /items/{id}                 detail (?status=true after creation)
/// /items/{id}/edit            edit form (GET), submit edit (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/items", items::router())
}
