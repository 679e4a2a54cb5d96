//! Handlers for the `/items` resource.
//!
//! Add submissions are validated and either answered with the form state
//! (422, submitted values plus rendered violations) or persisted and
//! redirected to the detail view (303). Edits are applied without
//! validation.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use itemservice_core::flow::FlowResult;
use itemservice_core::item::Item;
use itemservice_core::types::DbId;
use itemservice_core::validation::messages::MessageSource;
use itemservice_core::validation::violation::{MessageArg, ValidationOutcome, Violation};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Path of the item detail view, as used in `Location` headers.
fn detail_location(id: DbId, just_created: bool) -> String {
    if just_created {
        format!("/api/v1/items/{id}?status=true")
    } else {
        format!("/api/v1/items/{id}")
    }
}

/// Query parameters accepted by the detail view.
#[derive(Debug, Default, Deserialize)]
pub struct DetailParams {
    /// Set on the redirect after a successful add.
    #[serde(default)]
    pub status: Option<bool>,
}

/// Detail view payload.
#[derive(Debug, Serialize)]
pub struct ItemDetailResponse {
    pub data: Item,
    /// `true` right after the item was created.
    pub status: bool,
}

/// Body sent alongside a 303 redirect to the detail view.
#[derive(Debug, Serialize)]
pub struct RedirectTarget {
    pub id: DbId,
    pub status: bool,
}

/// A violation ready for display next to its field or at the top of the form.
#[derive(Debug, Serialize)]
pub struct ViolationView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub code: String,
    pub codes: Vec<String>,
    pub arguments: Vec<MessageArg>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_value: Option<serde_json::Value>,
    pub message: String,
}

impl ViolationView {
    fn render(violation: &Violation, messages: &MessageSource) -> Self {
        Self {
            field: violation.field.clone(),
            code: violation.code.clone(),
            codes: violation.codes.clone(),
            arguments: violation.arguments.clone(),
            rejected_value: violation.rejected_value.clone(),
            message: messages.resolve(violation),
        }
    }
}

/// 422 payload: the submitted item so the form keeps its values, plus the
/// violations split by scope.
#[derive(Debug, Serialize)]
pub struct FormErrorResponse {
    pub error: String,
    pub code: &'static str,
    pub item: Item,
    pub field_errors: Vec<ViolationView>,
    pub global_errors: Vec<ViolationView>,
}

impl FormErrorResponse {
    fn new(item: Item, outcome: &ValidationOutcome, messages: &MessageSource) -> Self {
        Self {
            error: format!("{} validation error(s)", outcome.len()),
            code: "VALIDATION_ERROR",
            item,
            field_errors: outcome
                .field_errors()
                .map(|v| ViolationView::render(v, messages))
                .collect(),
            global_errors: outcome
                .global_errors()
                .map(|v| ViolationView::render(v, messages))
                .collect(),
        }
    }
}

fn redirect_to_detail(id: DbId, just_created: bool) -> Response {
    (
        StatusCode::SEE_OTHER,
        [(header::LOCATION, detail_location(id, just_created))],
        Json(DataResponse {
            data: RedirectTarget {
                id,
                status: just_created,
            },
        }),
    )
        .into_response()
}

/// GET /api/v1/items
pub async fn list_items(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Item>>>> {
    let items = state.flow.list_items().await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/items/{id}
///
/// Returns 404 if the item does not exist.
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<DetailParams>,
) -> AppResult<Json<ItemDetailResponse>> {
    let item = state.flow.find_item(id).await?;
    Ok(Json(ItemDetailResponse {
        data: item,
        status: params.status.unwrap_or(false),
    }))
}

/// GET /api/v1/items/add
///
/// Empty item backing a fresh add form.
pub async fn add_form(State(state): State<AppState>) -> Json<DataResponse<Item>> {
    Json(DataResponse {
        data: state.flow.add_form(),
    })
}

/// POST /api/v1/items/add
///
/// Validates the submission. On failure responds 422 with the submitted item
/// and every violation; on success stores the item and answers 303 to the
/// detail view with `status=true`. A body that does not deserialize into an
/// item is a 400.
pub async fn add_item(
    State(state): State<AppState>,
    payload: Result<Json<Item>, JsonRejection>,
) -> AppResult<Response> {
    let Json(item) = payload?;
    match state.flow.submit_new_item(item).await? {
        FlowResult::ShowFormAgain { item, outcome } => {
            let body = FormErrorResponse::new(item, &outcome, &state.messages);
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response())
        }
        FlowResult::RedirectToDetail { id, just_created } => {
            Ok(redirect_to_detail(id, just_created))
        }
    }
}

/// GET /api/v1/items/{id}/edit
///
/// Current values backing the edit form. Returns 404 if missing.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Item>>> {
    let item = state.flow.edit_form(id).await?;
    Ok(Json(DataResponse { data: item }))
}

/// POST /api/v1/items/{id}/edit
///
/// Replaces the item's values without validation and answers 303 to the
/// detail view. Returns 404 if missing, 400 if the body names another id or
/// does not deserialize into an item.
pub async fn edit_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<Item>, JsonRejection>,
) -> AppResult<Response> {
    let Json(item) = payload?;
    if let Some(body_id) = item.id {
        if body_id != id {
            return Err(AppError::BadRequest(format!(
                "body id {body_id} does not match path id {id}"
            )));
        }
    }

    let id = state.flow.submit_edit(id, item).await?;
    Ok(redirect_to_detail(id, false))
}
