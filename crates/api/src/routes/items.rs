//! Item create and lookup endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use common::ItemId;
use domain::Item;
use serde::{Deserialize, Serialize};
use store::{ItemStore, StoreContext, UnitOfWork};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: ItemStore> {
    pub context: StoreContext<S>,
}

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: ItemId,
    pub name: String,
}

impl From<&Item> for ItemResponse {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id(),
            name: item.name().to_string(),
        }
    }
}

/// Path of the lookup route for `id`.
pub fn item_location(id: ItemId) -> String {
    format!("/items/{id}")
}

/// GET /items/:id — fetch a single item.
///
/// Identifiers that are not UUIDs never match a route, so they are reported
/// as not found rather than as a bad request.
#[tracing::instrument(skip(state))]
pub async fn get<S: ItemStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<ItemResponse>, ApiError> {
    let not_found = || ApiError::NotFound(format!("Item {id} not found"));

    let item_id: ItemId = id.parse().map_err(|_| not_found())?;
    let item = state
        .context
        .find_item(item_id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(ItemResponse::from(&item)))
}

/// POST /items — create an item and publish its creation event.
#[tracing::instrument(skip(state, req))]
pub async fn create<S: ItemStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Json(req): Json<CreateItemRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<ItemResponse>), ApiError> {
    let item = Item::create(req.name);
    let response = ItemResponse::from(&item);

    let mut uow = UnitOfWork::new();
    uow.add(item);
    state.context.save(&mut uow).await?;

    metrics::counter!("items_created_total").increment(1);
    tracing::debug!(item_id = %response.id, "item stored");

    let location = item_location(response.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(response),
    ))
}
