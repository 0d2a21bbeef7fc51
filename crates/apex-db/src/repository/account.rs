//! # Account Repository
//!
//! Database operations for the chart of accounts.

use sqlx::SqlitePool;

use crate::error::DbResult;
use crate::filter::FilterQuery;
use crate::query::{fetch_many, fetch_one};
use apex_core::{Account, AccountFilter, AccountParams};

const TABLE: &str = "accounting_accounts";

#[derive(Debug, Clone)]
pub struct AccountRepository {
    pool: SqlitePool,
}

impl AccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        AccountRepository { pool }
    }

    pub async fn get(&self, id: i64) -> DbResult<Account> {
        fetch_one(
            &self.pool,
            sqlx::query_as::<_, Account>("SELECT * FROM accounting_accounts WHERE id = ?").bind(id),
        )
        .await
    }

    /// Lists accounts whose description is `LIKE` the filter's pattern.
    pub async fn list(&self, filter: &AccountFilter) -> DbResult<Vec<Account>> {
        let mut query = FilterQuery::select(TABLE)
            .like("description", filter.description.clone())
            .order_by_id();

        fetch_many(&self.pool, query.build_query_as::<Account>()).await
    }

    pub async fn create(&self, params: &AccountParams) -> DbResult<Account> {
        fetch_one(
            &self.pool,
            sqlx::query_as::<_, Account>(
                "INSERT INTO accounting_accounts (description) VALUES (?) RETURNING *",
            )
            .bind(&params.description),
        )
        .await
    }

    pub async fn update(&self, id: i64, params: &AccountParams) -> DbResult<Account> {
        fetch_one(
            &self.pool,
            sqlx::query_as::<_, Account>(
                "UPDATE accounting_accounts SET description = ? WHERE id = ? RETURNING *",
            )
            .bind(&params.description)
            .bind(id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};

    fn params(description: &str) -> AccountParams {
        AccountParams {
            description: description.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let repo = Database::new(DbConfig::in_memory()).await.unwrap().accounts();

        let created = repo.create(&params("Cash")).await.unwrap();
        assert_eq!(repo.get(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_description_pattern() {
        let repo = Database::new(DbConfig::in_memory()).await.unwrap().accounts();
        repo.create(&params("Cash")).await.unwrap();
        repo.create(&params("Bank")).await.unwrap();
        repo.create(&params("Cash register")).await.unwrap();

        assert_eq!(repo.list(&AccountFilter::default()).await.unwrap().len(), 3);

        let cash = repo
            .list(&AccountFilter {
                description: Some("Cash%".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(cash.len(), 2);
        assert!(cash[0].id < cash[1].id);
    }

    #[tokio::test]
    async fn test_update() {
        let repo = Database::new(DbConfig::in_memory()).await.unwrap().accounts();
        let created = repo.create(&params("Cash")).await.unwrap();

        let updated = repo.update(created.id, &params("Petty cash")).await.unwrap();
        assert_eq!(updated.description, "Petty cash");

        assert!(matches!(
            repo.update(created.id + 100, &params("x")).await,
            Err(DbError::NotFound { .. })
        ));
    }
}
