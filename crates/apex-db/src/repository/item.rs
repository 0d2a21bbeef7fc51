//! # Item Repository
//!
//! Database operations for logistics items.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use crate::filter::FilterQuery;
use crate::query::{fetch_many, fetch_one};
use apex_core::{Item, ItemFilter, ItemParams};

const TABLE: &str = "logistics_items";

/// Repository for item database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.items();
///
/// let item = repo.create(&params).await?;
/// let same = repo.get(item.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository { pool }
    }

    /// Gets an item by its id.
    ///
    /// ## Returns
    /// * `Ok(Item)` - Item found
    /// * `Err(DbError::NotFound)` - No item with this id
    pub async fn get(&self, id: i64) -> DbResult<Item> {
        fetch_one(
            &self.pool,
            sqlx::query_as::<_, Item>("SELECT * FROM logistics_items WHERE id = ?").bind(id),
        )
        .await
    }

    /// Lists items matching `filter`, ascending by id.
    ///
    /// `name` and `sku` are `LIKE` patterns, the rest match exactly.
    /// An empty result is `DbError::NotFound`.
    pub async fn list(&self, filter: &ItemFilter) -> DbResult<Vec<Item>> {
        debug!(?filter, "Listing items");

        let mut query = FilterQuery::select(TABLE)
            .like("name", filter.name.clone())
            .like("sku", filter.sku.clone())
            .matches("category_id", filter.category_id)
            .matches("gross_price", filter.gross_price)
            .matches("net_price", filter.net_price)
            .order_by_id();

        fetch_many(&self.pool, query.build_query_as::<Item>()).await
    }

    /// Inserts a new item and returns it with its assigned id.
    pub async fn create(&self, params: &ItemParams) -> DbResult<Item> {
        let item = fetch_one(
            &self.pool,
            sqlx::query_as::<_, Item>(
                r#"
                INSERT INTO logistics_items (name, sku, category_id, gross_price, net_price)
                VALUES (?, ?, ?, ?, ?)
                RETURNING *
                "#,
            )
            .bind(&params.name)
            .bind(&params.sku)
            .bind(params.category_id)
            .bind(params.gross_price)
            .bind(params.net_price),
        )
        .await?;

        debug!(id = item.id, sku = %item.sku, "Item created");
        Ok(item)
    }

    /// Replaces every field of item `id`.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No item with this id (nothing returned)
    pub async fn update(&self, id: i64, params: &ItemParams) -> DbResult<Item> {
        fetch_one(
            &self.pool,
            sqlx::query_as::<_, Item>(
                r#"
                UPDATE logistics_items
                SET name = ?, sku = ?, category_id = ?, gross_price = ?, net_price = ?
                WHERE id = ?
                RETURNING *
                "#,
            )
            .bind(&params.name)
            .bind(&params.sku)
            .bind(params.category_id)
            .bind(params.gross_price)
            .bind(params.net_price)
            .bind(id),
        )
        .await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
