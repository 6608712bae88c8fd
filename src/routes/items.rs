//! Item routes: one parameterized list/create/update/delete implementation.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::item::{CreateItem, DeletedItem, Item, UpdateItem, UpdatedItem};
use crate::models::pagination::{Paged, Pagination};
use crate::services::item::{self as item_service, ItemFilters};
use crate::AppState;

/// GET /api/items — list items with status/search filters and pagination.
pub async fn list(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
    Query(filters): Query<ItemFilters>,
) -> Result<Json<Paged<Item>>, AppError> {
    let result = item_service::list(&state.db, &filters, &pagination).await?;
    Ok(Json(result))
}

/// POST /api/items — create an item.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateItem>,
) -> Result<Json<Item>, AppError> {
    let item = item_service::create(&state.db, &body).await?;
    Ok(Json(item))
}

/// PUT /api/items — merge-update an item; `id` comes from the body.
pub async fn update(
    State(state): State<AppState>,
    Json(body): Json<UpdateItem>,
) -> Result<Json<UpdatedItem>, AppError> {
    let echo = item_service::update(&state.db, &body).await?;
    Ok(Json(echo))
}

/// Query parameters for item deletion.
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub id: Option<Uuid>,
}

/// DELETE /api/items?id= — delete an item by query parameter.
pub async fn remove(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<DeletedItem>, AppError> {
    let id = params
        .id
        .ok_or_else(|| AppError::Validation("ID is required".to_string()))?;
    let result = item_service::delete(&state.db, id).await?;
    Ok(Json(result))
}
