//! # Logistics Module
//!
//! Items, addresses and plants: HTML views under `/logistics` and a JSON API
//! for items under `/api/logistics`.
//!
//! ```text
//! /logistics                     dashboard
//! /logistics/items[/new|/{id}]   list, create form, detail + update
//! /logistics/addresses[...]      same shape
//! /logistics/plants[...]         same shape
//! /api/logistics/items[/{id}]    JSON
//! ```

pub mod api;
pub mod ui;

use apex_core::{AddressFilter, ItemFilter, PlantFilter, ValidationError};

use crate::ui::QueryParams;

/// `?name=&sku=&category_id=&gross_price=&net_price=`
pub fn item_filter(query: &QueryParams) -> Result<ItemFilter, ValidationError> {
    Ok(ItemFilter {
        name: query.text("name"),
        sku: query.text("sku"),
        category_id: query.int("category_id")?,
        gross_price: query.int("gross_price")?,
        net_price: query.int("net_price")?,
    })
}

/// `?zip=&city=&street=&country=`
pub fn address_filter(query: &QueryParams) -> Result<AddressFilter, ValidationError> {
    Ok(AddressFilter {
        zip: query.text("zip"),
        city: query.text("city"),
        street: query.text("street"),
        country: query.text("country"),
    })
}

/// `?name=&address_id=`
pub fn plant_filter(query: &QueryParams) -> Result<PlantFilter, ValidationError> {
    Ok(PlantFilter {
        name: query.text("name"),
        address_id: query.int("address_id")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_unconstrained_filter() {
        let filter = item_filter(&QueryParams::from_query(None)).unwrap();
        assert_eq!(filter, ItemFilter::default());
    }

    #[test]
    fn test_item_filter_fields() {
        let query = QueryParams::from_query(Some("name=Bo%25&category_id=2&net_price="));
        let filter = item_filter(&query).unwrap();

        assert_eq!(filter.name.as_deref(), Some("Bo%"));
        assert_eq!(filter.category_id, Some(2));
        assert_eq!(filter.net_price, None);
    }

    #[test]
    fn test_plant_filter_rejects_bad_address() {
        let query = QueryParams::from_query(Some("address_id=north"));
        assert!(plant_filter(&query).is_err());
    }
}
