//! Logistics HTML views.

use apex_core::{
    Address, AddressFilter, AddressParams, Item, ItemFilter, ItemParams, Plant, PlantFilter,
    PlantParams,
};
use axum::Router;

use super::{address_filter, item_filter, plant_filter};
use crate::error::AppError;
use crate::services::LogisticsService;
use crate::ui::{
    create, create_view, create_view_with, detail, detail_with, list_view, reference, static_view,
    update, Extras, UiState,
};

/// Routes mounted under `/logistics`.
pub fn router(state: UiState<LogisticsService>) -> Router {
    Router::new()
        .route("/", static_view("logistics/index.html"))
        // Items
        .route(
            "/items",
            list_view(
                item_filter,
                |s: LogisticsService, filter: ItemFilter| async move { s.items(filter).await },
                "logistics/items.html",
            )
            .merge(create(|s: LogisticsService, params: ItemParams| async move {
                s.create_item(params).await
            })),
        )
        .route(
            "/items/new",
            create_view_with::<_, Item, _, _>(item_extras, "logistics/item.html"),
        )
        .route(
            "/items/{id}",
            detail_with(
                |s: LogisticsService, id| async move { s.item(id).await },
                item_extras,
                "logistics/item.html",
            )
            .merge(update(|s: LogisticsService, id, params: ItemParams| async move {
                s.update_item(id, params).await
            })),
        )
        // Addresses
        .route(
            "/addresses",
            list_view(
                address_filter,
                |s: LogisticsService, filter: AddressFilter| async move { s.addresses(filter).await },
                "logistics/addresses.html",
            )
            .merge(create(|s: LogisticsService, params: AddressParams| async move {
                s.create_address(params).await
            })),
        )
        .route(
            "/addresses/new",
            create_view::<_, Address>("logistics/address.html"),
        )
        .route(
            "/addresses/{id}",
            detail(
                |s: LogisticsService, id| async move { s.address(id).await },
                "logistics/address.html",
            )
            .merge(update(|s: LogisticsService, id, params: AddressParams| async move {
                s.update_address(id, params).await
            })),
        )
        // Plants
        .route(
            "/plants",
            list_view(
                plant_filter,
                |s: LogisticsService, filter: PlantFilter| async move { s.plants(filter).await },
                "logistics/plants.html",
            )
            .merge(create(|s: LogisticsService, params: PlantParams| async move {
                s.create_plant(params).await
            })),
        )
        .route(
            "/plants/new",
            create_view_with::<_, Plant, _, _>(plant_extras, "logistics/plant.html"),
        )
        .route(
            "/plants/{id}",
            detail_with(
                |s: LogisticsService, id| async move { s.plant(id).await },
                plant_extras,
                "logistics/plant.html",
            )
            .merge(update(|s: LogisticsService, id, params: PlantParams| async move {
                s.update_plant(id, params).await
            })),
        )
        .with_state(state)
}

/// Category options for the item form.
async fn item_extras(service: LogisticsService) -> Result<Extras, AppError> {
    let categories = reference(service.item_categories().await)?;
    Ok(Extras::from([("categories", categories)]))
}

/// Address options for the plant form.
async fn plant_extras(service: LogisticsService) -> Result<Extras, AppError> {
    let addresses = reference(service.addresses(AddressFilter::default()).await)?;
    Ok(Extras::from([("addresses", addresses)]))
}
