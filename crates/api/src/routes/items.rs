//! Route definitions for the `/items` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;

/// Routes mounted at `/items`.
///
/// ```text
/// GET    /             -> list_items
/// GET    /add          -> add_form
/// POST   /add          -> add_item
/// GET    /{id}         -> get_item   (?status)
/// GET    /{id}/edit    -> edit_form
/// POST   /{id}/edit    -> edit_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(items::list_items))
        .route("/add", get(items::add_form).post(items::add_item))
        .route("/{id}", get(items::get_item))
        .route("/{id}/edit", get(items::edit_form).post(items::edit_item))
}
