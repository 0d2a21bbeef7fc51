//! # Document Repository
//!
//! Ledger documents: one header row plus its position rows.
//!
//! ## Composite Writes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  create(params)                         update(id, params)              │
//! │                                                                         │
//! │  BEGIN                                  BEGIN                           │
//! │   INSERT header RETURNING *              UPDATE header RETURNING *      │
//! │   INSERT position RETURNING *  ×n          (no row → NotFound)          │
//! │  COMMIT                                  DELETE positions of header     │
//! │                                          INSERT position RETURNING * ×n │
//! │                                         COMMIT                          │
//! │                                                                         │
//! │  Any failure drops the transaction and rolls everything back, so no     │
//! │  header is ever stored without the positions it was submitted with.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use sqlx::{SqliteConnection, SqlitePool};
use tracing::{debug, warn};

use crate::error::{DbError, DbResult};
use crate::filter::FilterQuery;
use crate::query::{fetch_many, fetch_one};
use apex_core::{
    Document, DocumentFilter, DocumentHeader, DocumentParams, DocumentPosition,
    DocumentPositionParams,
};

const HEADERS: &str = "accounting_documents";
const POSITIONS: &str = "accounting_document_positions";

#[derive(Debug, Clone)]
pub struct DocumentRepository {
    pool: SqlitePool,
}

impl DocumentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        DocumentRepository { pool }
    }

    /// Gets a document with its positions (ascending by id).
    ///
    /// A header without positions is returned with an empty position list.
    pub async fn get(&self, id: i64) -> DbResult<Document> {
        let header = fetch_one(
            &self.pool,
            sqlx::query_as::<_, DocumentHeader>("SELECT * FROM accounting_documents WHERE id = ?")
                .bind(id),
        )
        .await?;

        let positions = sqlx::query_as::<_, DocumentPosition>(
            "SELECT * FROM accounting_document_positions WHERE document_id = ? ORDER BY id",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Document { header, positions })
    }

    /// Lists documents matching `filter`, ascending by id, each with its
    /// positions.
    ///
    /// Positions are selected with the header predicates as a subquery, so
    /// the statement size does not grow with the number of documents.
    pub async fn list(&self, filter: &DocumentFilter) -> DbResult<Vec<Document>> {
        let mut query = header_predicates(FilterQuery::select(HEADERS), filter).order_by_id();
        let headers = fetch_many(&self.pool, query.build_query_as::<DocumentHeader>()).await?;

        let mut query = header_predicates(
            FilterQuery::select_children(POSITIONS, "document_id", HEADERS),
            filter,
        )
        .order_by("document_id, id");
        let rows = query
            .build_query_as::<DocumentPosition>()
            .fetch_all(&self.pool)
            .await?;

        let mut positions: HashMap<i64, Vec<DocumentPosition>> = HashMap::new();
        for position in rows {
            positions.entry(position.document_id).or_default().push(position);
        }

        Ok(headers
            .into_iter()
            .map(|header| {
                let positions = positions.remove(&header.id).unwrap_or_default();
                Document { header, positions }
            })
            .collect())
    }

    /// Stores a header and its positions in one transaction.
    pub async fn create(&self, params: &DocumentParams) -> DbResult<Document> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let header = fetch_one(
            &mut *tx,
            sqlx::query_as::<_, DocumentHeader>(
                r#"
                INSERT INTO accounting_documents
                    (date, posting_date, reference, description, currency_id)
                VALUES (?, ?, ?, ?, ?)
                RETURNING *
                "#,
            )
            .bind(params.header.date)
            .bind(params.header.posting_date)
            .bind(&params.header.reference)
            .bind(&params.header.description)
            .bind(params.header.currency_id),
        )
        .await?;

        let positions = insert_positions(&mut *tx, header.id, &params.positions).await?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        debug!(id = header.id, positions = positions.len(), "Document created");
        Ok(Document { header, positions })
    }

    /// Replaces the header of document `id` and its complete set of positions.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No document with this id; nothing changes
    pub async fn update(&self, id: i64, params: &DocumentParams) -> DbResult<Document> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let header = fetch_one(
            &mut *tx,
            sqlx::query_as::<_, DocumentHeader>(
                r#"
                UPDATE accounting_documents
                SET date = ?, posting_date = ?, reference = ?, description = ?, currency_id = ?
                WHERE id = ?
                RETURNING *
                "#,
            )
            .bind(params.header.date)
            .bind(params.header.posting_date)
            .bind(&params.header.reference)
            .bind(&params.header.description)
            .bind(params.header.currency_id)
            .bind(id),
        )
        .await?;

        let removed = sqlx::query("DELETE FROM accounting_document_positions WHERE document_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let positions = insert_positions(&mut *tx, id, &params.positions).await?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        debug!(id, removed, inserted = positions.len(), "Document replaced");
        Ok(Document { header, positions })
    }
}

fn header_predicates<'args>(
    query: FilterQuery<'args>,
    filter: &DocumentFilter,
) -> FilterQuery<'args> {
    query
        .like("reference", filter.reference.clone())
        .matches("currency_id", filter.currency_id)
}

async fn insert_positions(
    conn: &mut SqliteConnection,
    document_id: i64,
    positions: &[DocumentPositionParams],
) -> DbResult<Vec<DocumentPosition>> {
    let mut stored = Vec::with_capacity(positions.len());

    for position in positions {
        let row = fetch_one(
            &mut *conn,
            sqlx::query_as::<_, DocumentPosition>(
                r#"
                INSERT INTO accounting_document_positions
                    (document_id, account_id, type_id, amount, description)
                VALUES (?, ?, ?, ?, ?)
                RETURNING *
                "#,
            )
            .bind(document_id)
            .bind(position.account_id)
            .bind(position.type_id)
            .bind(position.amount)
            .bind(&position.description),
        )
        .await
        .inspect_err(|err| warn!(document_id, error = %err, "Position insert failed"))?;

        stored.push(row);
    }

    Ok(stored)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use apex_core::{AccountParams, DocumentHeaderParams};
    use chrono::NaiveDate;

    const DEBIT: i64 = 1;
    const CREDIT: i64 = 2;
    const EUR: i64 = 1;

    async fn setup() -> (Database, i64, i64) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let accounts = db.accounts();
        let cash = accounts
            .create(&AccountParams {
                description: "Cash".to_string(),
            })
            .await
            .unwrap();
        let revenue = accounts
            .create(&AccountParams {
                description: "Revenue".to_string(),
            })
            .await
            .unwrap();
        (db, cash.id, revenue.id)
    }

    fn position(account_id: i64, type_id: i64, amount: i64) -> DocumentPositionParams {
        DocumentPositionParams {
            account_id,
            type_id,
            amount,
            description: String::new(),
        }
    }

    fn params(reference: &str, positions: Vec<DocumentPositionParams>) -> DocumentParams {
        let date = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
        DocumentParams {
            header: DocumentHeaderParams {
                date,
                posting_date: date,
                reference: reference.to_string(),
                description: "Sale".to_string(),
                currency_id: EUR,
            },
            positions,
        }
    }

    async fn header_count(db: &Database) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM accounting_documents")
            .fetch_one(db.pool())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_document() {
        let (db, cash, revenue) = setup().await;
        let repo = db.documents();

        let created = repo
            .create(&params(
                "INV-1",
                vec![position(cash, DEBIT, 1190), position(revenue, CREDIT, 1190)],
            ))
            .await
            .unwrap();

        assert_eq!(created.positions.len(), 2);
        assert!(created.positions.iter().all(|p| p.document_id == created.header.id));

        let fetched = repo.get(created.header.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.total_for(DEBIT), fetched.total_for(CREDIT));
    }

    #[tokio::test]
    async fn test_document_without_positions() {
        let (db, _, _) = setup().await;
        let repo = db.documents();

        let created = repo.create(&params("EMPTY", vec![])).await.unwrap();
        let fetched = repo.get(created.header.id).await.unwrap();

        assert!(fetched.positions.is_empty());
    }

    #[tokio::test]
    async fn test_failed_position_rolls_back_header() {
        let (db, cash, _) = setup().await;
        let repo = db.documents();

        // Account 999 does not exist
        let result = repo
            .create(&params(
                "INV-BAD",
                vec![position(cash, DEBIT, 100), position(999, CREDIT, 100)],
            ))
            .await;

        assert!(result.is_err());
        assert_eq!(header_count(&db).await, 0);
    }

    #[tokio::test]
    async fn test_list_attaches_positions_and_filters() {
        let (db, cash, revenue) = setup().await;
        let repo = db.documents();

        repo.create(&params("INV-1", vec![position(cash, DEBIT, 100)]))
            .await
            .unwrap();
        repo.create(&params(
            "INV-2",
            vec![position(cash, DEBIT, 200), position(revenue, CREDIT, 200)],
        ))
        .await
        .unwrap();
        repo.create(&params("CN-1", vec![])).await.unwrap();

        let all = repo.list(&DocumentFilter::default()).await.unwrap();
        let counts: Vec<usize> = all.iter().map(|d| d.positions.len()).collect();
        assert_eq!(counts, vec![1, 2, 0]);

        let invoices = repo
            .list(&DocumentFilter {
                reference: Some("INV-%".to_string()),
                currency_id: Some(EUR),
            })
            .await
            .unwrap();
        assert_eq!(invoices.len(), 2);

        let usd = repo
            .list(&DocumentFilter {
                currency_id: Some(2),
                ..Default::default()
            })
            .await;
        assert!(matches!(usd, Err(DbError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_replaces_positions() {
        let (db, cash, revenue) = setup().await;
        let repo = db.documents();

        let created = repo
            .create(&params("INV-1", vec![position(cash, DEBIT, 100)]))
            .await
            .unwrap();

        let updated = repo
            .update(
                created.header.id,
                &params(
                    "INV-1a",
                    vec![position(cash, DEBIT, 300), position(revenue, CREDIT, 300)],
                ),
            )
            .await
            .unwrap();

        assert_eq!(updated.header.reference, "INV-1a");
        assert_eq!(updated.positions.len(), 2);
        assert_eq!(repo.get(created.header.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let (db, cash, _) = setup().await;
        let result = db
            .documents()
            .update(404, &params("X", vec![position(cash, DEBIT, 1)]))
            .await;

        assert!(matches!(result, Err(DbError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_beyond_bind_variable_limit() {
        let (db, cash, _) = setup().await;
        let repo = db.documents();

        // More headers than SQLite accepts bind variables (32766)
        sqlx::query(
            r#"
            WITH RECURSIVE seq(n) AS (
                SELECT 1 UNION ALL SELECT n + 1 FROM seq WHERE n < 40000
            )
            INSERT INTO accounting_documents
                (date, posting_date, reference, description, currency_id)
            SELECT '2024-01-01', '2024-01-01', 'BULK-' || n, '', 1 FROM seq
            "#,
        )
        .execute(db.pool())
        .await
        .unwrap();
        let last = repo
            .create(&params("LAST", vec![position(cash, DEBIT, 5)]))
            .await
            .unwrap();

        let all = repo.list(&DocumentFilter::default()).await.unwrap();

        assert_eq!(all.len(), 40_001);
        assert_eq!(all.last().map(|d| &d.positions), Some(&last.positions));
        assert!(all[..40_000].iter().all(|d| d.positions.is_empty()));
    }
}
