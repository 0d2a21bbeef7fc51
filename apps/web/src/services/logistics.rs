//! Logistics service: items, categories, addresses, plants.

use apex_core::{
    Address, AddressFilter, AddressParams, Item, ItemCategory, ItemFilter, ItemParams, Plant,
    PlantFilter, PlantParams,
};
use apex_db::{Database, DbResult};

#[derive(Debug, Clone)]
pub struct LogisticsService {
    db: Database,
}

impl LogisticsService {
    pub fn new(db: Database) -> Self {
        LogisticsService { db }
    }

    // =========================================================================
    // Items
    // =========================================================================

    pub async fn item(&self, id: i64) -> DbResult<Item> {
        self.db.items().get(id).await
    }

    pub async fn items(&self, filter: ItemFilter) -> DbResult<Vec<Item>> {
        self.db.items().list(&filter).await
    }

    pub async fn create_item(&self, params: ItemParams) -> DbResult<Item> {
        self.db.items().create(&params).await
    }

    pub async fn update_item(&self, id: i64, params: ItemParams) -> DbResult<Item> {
        self.db.items().update(id, &params).await
    }

    pub async fn item_categories(&self) -> DbResult<Vec<ItemCategory>> {
        self.db.item_categories().list().await
    }

    // =========================================================================
    // Addresses
    // =========================================================================

    pub async fn address(&self, id: i64) -> DbResult<Address> {
        self.db.addresses().get(id).await
    }

    pub async fn addresses(&self, filter: AddressFilter) -> DbResult<Vec<Address>> {
        self.db.addresses().list(&filter).await
    }

    pub async fn create_address(&self, params: AddressParams) -> DbResult<Address> {
        self.db.addresses().create(&params).await
    }

    pub async fn update_address(&self, id: i64, params: AddressParams) -> DbResult<Address> {
        self.db.addresses().update(id, &params).await
    }

    // =========================================================================
    // Plants
    // =========================================================================

    pub async fn plant(&self, id: i64) -> DbResult<Plant> {
        self.db.plants().get(id).await
    }

    pub async fn plants(&self, filter: PlantFilter) -> DbResult<Vec<Plant>> {
        self.db.plants().list(&filter).await
    }

    pub async fn create_plant(&self, params: PlantParams) -> DbResult<Plant> {
        self.db.plants().create(&params).await
    }

    pub async fn update_plant(&self, id: i64, params: PlantParams) -> DbResult<Plant> {
        self.db.plants().update(id, &params).await
    }
}
