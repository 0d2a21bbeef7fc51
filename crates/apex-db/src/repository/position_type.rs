//! # Document Position Type Repository

use sqlx::SqlitePool;

use crate::error::DbResult;
use crate::query::fetch_many;
use apex_core::DocumentPositionType;

#[derive(Debug, Clone)]
pub struct PositionTypeRepository {
    pool: SqlitePool,
}

impl PositionTypeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        PositionTypeRepository { pool }
    }

    /// Every position type, ascending by id.
    pub async fn list(&self) -> DbResult<Vec<DocumentPositionType>> {
        fetch_many(
            &self.pool,
            sqlx::query_as::<_, DocumentPositionType>(
                "SELECT * FROM accounting_document_position_types ORDER BY id",
            ),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_fixture_position_types_listed() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let types = db.position_types().list().await.unwrap();

        assert_eq!(types.len(), 2);
        assert_eq!(types[0].description, "Debit");
        assert_eq!(types[1].description, "Credit");
    }
}
