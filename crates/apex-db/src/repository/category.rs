//! # Item Category Repository
//!
//! Reference data for the item forms. Seeded by migrations.

use sqlx::SqlitePool;

use crate::error::DbResult;
use crate::query::fetch_many;
use apex_core::ItemCategory;

#[derive(Debug, Clone)]
pub struct ItemCategoryRepository {
    pool: SqlitePool,
}

impl ItemCategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        ItemCategoryRepository { pool }
    }

    /// Every category, ascending by id.
    pub async fn list(&self) -> DbResult<Vec<ItemCategory>> {
        fetch_many(
            &self.pool,
            sqlx::query_as::<_, ItemCategory>("SELECT * FROM logistics_item_categories ORDER BY id"),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_fixture_categories_listed() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let categories = db.item_categories().list().await.unwrap();

        assert_eq!(categories[0].id, 1);
        assert!(categories.windows(2).all(|w| w[0].id < w[1].id));
    }
}
