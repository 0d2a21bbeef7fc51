//! # Currency Repository

use sqlx::SqlitePool;

use crate::error::DbResult;
use crate::query::fetch_many;
use apex_core::Currency;

#[derive(Debug, Clone)]
pub struct CurrencyRepository {
    pool: SqlitePool,
}

impl CurrencyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        CurrencyRepository { pool }
    }

    /// Every currency, ascending by id.
    pub async fn list(&self) -> DbResult<Vec<Currency>> {
        fetch_many(
            &self.pool,
            sqlx::query_as::<_, Currency>("SELECT * FROM accounting_currencies ORDER BY id"),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_fixture_currencies_listed() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let currencies = db.currencies().list().await.unwrap();

        let codes: Vec<&str> = currencies.iter().map(|c| c.iso.as_str()).collect();
        assert_eq!(codes, vec!["EUR", "USD"]);
    }
}
