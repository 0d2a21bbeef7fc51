//! # Logistics Records
//!
//! Goods and where they are kept.
//!
//! ## Record Relations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────┐         ┌─────────────────┐                        │
//! │  │  ItemCategory   │◄────────│      Item       │                        │
//! │  │  ─────────────  │  1    n │  ─────────────  │                        │
//! │  │  id             │         │  id             │                        │
//! │  │  name           │         │  name, sku      │                        │
//! │  └─────────────────┘         │  category_id    │                        │
//! │                              │  gross_price    │  minor units           │
//! │                              │  net_price      │                        │
//! │                              └─────────────────┘                        │
//! │                                                                         │
//! │  ┌─────────────────┐         ┌─────────────────┐                        │
//! │  │    Address      │◄────────│      Plant      │                        │
//! │  │  ─────────────  │  1    n │  ─────────────  │                        │
//! │  │  zip, city      │         │  id             │                        │
//! │  │  street, number │         │  name           │                        │
//! │  │  country        │         │  address_id     │                        │
//! │  │  lat / lon      │         └─────────────────┘                        │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every record comes with a `*Params` struct (the full body of a create or
//! update) and, where it can be listed, a `*Filter` whose unset fields do not
//! constrain the query.

use serde::{Deserialize, Serialize};

use crate::resource::Resource;

// =============================================================================
// Item Category
// =============================================================================

/// Reference data for items. Seeded by migrations, never edited in the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ItemCategory {
    pub id: i64,
    pub name: String,
}

// =============================================================================
// Item
// =============================================================================

/// A stocked good.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Item {
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Stock keeping unit.
    pub sku: String,

    pub category_id: i64,

    /// Price including tax, in minor units.
    pub gross_price: i64,

    /// Price excluding tax, in minor units.
    pub net_price: i64,
}

impl Resource for Item {
    fn id(&self) -> i64 {
        self.id
    }

    fn redirect(&self) -> String {
        format!("/logistics/items/{}", self.id)
    }
}

/// Body of an item create or update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemParams {
    pub name: String,
    pub sku: String,
    pub category_id: i64,
    pub gross_price: i64,
    pub net_price: i64,
}

/// Item list constraints. `name` and `sku` are `LIKE` patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFilter {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub category_id: Option<i64>,
    pub gross_price: Option<i64>,
    pub net_price: Option<i64>,
}

// =============================================================================
// Address
// =============================================================================

/// A postal address with coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Address {
    pub id: i64,
    pub zip: String,
    pub city: String,
    pub street: String,
    pub street_number: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Resource for Address {
    fn id(&self) -> i64 {
        self.id
    }

    fn redirect(&self) -> String {
        format!("/logistics/addresses/{}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressParams {
    pub zip: String,
    pub city: String,
    pub street: String,
    pub street_number: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Address list constraints. Text fields are `LIKE` patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressFilter {
    pub zip: Option<String>,
    pub city: Option<String>,
    pub street: Option<String>,
    pub country: Option<String>,
}

// =============================================================================
// Plant
// =============================================================================

/// A site operating at an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Plant {
    pub id: i64,
    pub name: String,
    pub address_id: i64,
}

impl Resource for Plant {
    fn id(&self) -> i64 {
        self.id
    }

    fn redirect(&self) -> String {
        format!("/logistics/plants/{}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantParams {
    pub name: String,
    pub address_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantFilter {
    pub name: Option<String>,
    pub address_id: Option<i64>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn bolt() -> Item {
        Item {
            id: 7,
            name: "Bolt".to_string(),
            sku: "B-1".to_string(),
            category_id: 1,
            gross_price: 120,
            net_price: 100,
        }
    }

    #[test]
    fn test_redirect_paths() {
        assert_eq!(bolt().redirect(), "/logistics/items/7");

        let plant = Plant {
            id: 3,
            name: "North".to_string(),
            address_id: 1,
        };
        assert_eq!(plant.redirect(), "/logistics/plants/3");
    }

    #[test]
    fn test_item_params_from_json() {
        let json = r#"{"name":"Bolt","sku":"B-1","category_id":1,"gross_price":120,"net_price":100}"#;
        let params: ItemParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.name, "Bolt");
        assert_eq!(params.gross_price, 120);
    }

    #[test]
    fn test_default_filter_is_unconstrained() {
        let filter = ItemFilter::default();
        assert!(filter.name.is_none());
        assert!(filter.category_id.is_none());
    }
}
