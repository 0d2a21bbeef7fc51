//! # Data-Access Helpers
//!
//! Every repository read goes through one of two helpers.
//!
//! ```text
//! fetch_one(executor, query)    0 rows ──► DbError::NotFound
//!                               1 row  ──► Ok(T)
//!                               error  ──► DbError::* (Internal)
//!
//! fetch_many(executor, query)   0 rows ──► DbError::NotFound
//!                               n rows ──► Ok(Vec<T>)   (never empty)
//!                               error  ──► DbError::* (Internal)
//! ```
//!
//! An empty result is always an error. Callers that can live with "nothing"
//! (list views, reference dropdowns) have to say so explicitly by matching
//! on [`DbError::NotFound`].
//!
//! Both helpers take any SQLite executor, so the same code runs against the
//! pool or inside a transaction (`&mut *tx`).

use sqlx::query::QueryAs;
use sqlx::sqlite::SqliteRow;
use sqlx::{Executor, FromRow, IntoArguments, Sqlite};

use crate::error::{DbError, DbResult};

/// Runs `query` and returns exactly one row.
///
/// ## Returns
/// * `Ok(T)` - The first row
/// * `Err(DbError::NotFound)` - No row matched
/// * `Err(_)` - Driver or decode failure
pub async fn fetch_one<'q, 'c, T, A, E>(executor: E, query: QueryAs<'q, Sqlite, T, A>) -> DbResult<T>
where
    E: Executor<'c, Database = Sqlite>,
    A: 'q + IntoArguments<'q, Sqlite>,
    T: Send + Unpin + for<'r> FromRow<'r, SqliteRow>,
{
    query.fetch_optional(executor).await?.ok_or_else(|| DbError::not_found("Record"))
}

/// Runs `query` and returns every row, failing on an empty set.
pub async fn fetch_many<'q, 'c, T, A, E>(
    executor: E,
    query: QueryAs<'q, Sqlite, T, A>,
) -> DbResult<Vec<T>>
where
    E: Executor<'c, Database = Sqlite>,
    A: 'q + IntoArguments<'q, Sqlite>,
    T: Send + Unpin + for<'r> FromRow<'r, SqliteRow>,
{
    let rows = query.fetch_all(executor).await?;

    if rows.is_empty() {
        return Err(DbError::not_found("Records"));
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use apex_core::ItemCategory;

    #[tokio::test]
    async fn test_fetch_one_zero_rows_is_not_found() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let result = fetch_one(
            db.pool(),
            sqlx::query_as::<_, ItemCategory>("SELECT * FROM logistics_item_categories WHERE id = ?")
                .bind(-1_i64),
        )
        .await;

        assert!(matches!(result, Err(DbError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_fetch_many_zero_rows_is_not_found() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let result = fetch_many(
            db.pool(),
            sqlx::query_as::<_, ItemCategory>("SELECT * FROM logistics_item_categories WHERE 1 = 0"),
        )
        .await;

        assert!(matches!(result, Err(DbError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_fetch_many_returns_rows() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let rows = fetch_many(
            db.pool(),
            sqlx::query_as::<_, ItemCategory>("SELECT * FROM logistics_item_categories ORDER BY id"),
        )
        .await
        .unwrap();

        assert!(!rows.is_empty());
        assert_eq!(rows[0].id, 1);
    }

    #[tokio::test]
    async fn test_broken_query_is_internal() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let result = fetch_one(
            db.pool(),
            sqlx::query_as::<_, ItemCategory>("SELECT * FROM no_such_table"),
        )
        .await;

        assert_eq!(result.unwrap_err().kind(), apex_core::ErrorKind::Internal);
    }
}
