//! # Logistics JSON API
//!
//! ```text
//! GET  /api/logistics/items/{id}   200 item | 400 malformed id | 404
//! GET  /api/logistics/items?...    200 [item] | 400 bad filter | 404 when empty
//! POST /api/logistics/items        200 item | 400 malformed body | 500
//! ```
//!
//! Errors are plain-text bodies, same as the HTML views.

use apex_core::{Item, ItemParams};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, RawQuery, State};
use axum::routing::get;
use axum::{Json, Router};
use tracing::{debug, error, info};

use super::item_filter;
use crate::error::AppError;
use crate::services::LogisticsService;
use crate::ui::handlers::path_id;
use crate::ui::QueryParams;

/// Routes mounted under `/api/logistics`.
pub fn router(service: LogisticsService) -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", get(get_item))
        .with_state(service)
}

async fn get_item(
    State(service): State<LogisticsService>,
    Path(raw): Path<String>,
) -> Result<Json<Item>, AppError> {
    let id = path_id(&raw)?;
    Ok(Json(service.item(id).await?))
}

/// An empty result is a 404, never `[]`.
async fn list_items(
    State(service): State<LogisticsService>,
    RawQuery(raw): RawQuery,
) -> Result<Json<Vec<Item>>, AppError> {
    let filter = item_filter(&QueryParams::from_query(raw.as_deref()))?;
    Ok(Json(service.items(filter).await?))
}

async fn create_item(
    State(service): State<LogisticsService>,
    body: Result<Json<ItemParams>, JsonRejection>,
) -> Result<Json<Item>, AppError> {
    let Json(params) = body.map_err(|rejection| {
        debug!(error = %rejection, "Unable to decode item");
        AppError::bad_request("unable to decode body")
    })?;

    let item = service.create_item(params).await.map_err(|err| {
        error!(error = %err, "Unable to create item");
        AppError::internal()
    })?;

    info!(id = item.id, sku = %item.sku, "Item created via API");
    Ok(Json(item))
}
