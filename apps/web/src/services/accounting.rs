//! Accounting service: accounts, reference data, documents.

use apex_core::{
    Account, AccountFilter, AccountParams, Currency, Document, DocumentFilter, DocumentParams,
    DocumentPositionType, Money,
};
use apex_db::{Database, DbResult};
use serde::Serialize;

/// A document together with one total per position type, as shown on its
/// detail page.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentView {
    #[serde(flatten)]
    pub document: Document,
    pub totals: Vec<PositionTotal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionTotal {
    pub description: String,
    pub amount: Money,
}

#[derive(Debug, Clone)]
pub struct AccountingService {
    db: Database,
}

impl AccountingService {
    pub fn new(db: Database) -> Self {
        AccountingService { db }
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    pub async fn account(&self, id: i64) -> DbResult<Account> {
        self.db.accounts().get(id).await
    }

    pub async fn accounts(&self, filter: AccountFilter) -> DbResult<Vec<Account>> {
        self.db.accounts().list(&filter).await
    }

    pub async fn create_account(&self, params: AccountParams) -> DbResult<Account> {
        self.db.accounts().create(&params).await
    }

    pub async fn update_account(&self, id: i64, params: AccountParams) -> DbResult<Account> {
        self.db.accounts().update(id, &params).await
    }

    // =========================================================================
    // Reference data
    // =========================================================================

    pub async fn currencies(&self) -> DbResult<Vec<Currency>> {
        self.db.currencies().list().await
    }

    pub async fn position_types(&self) -> DbResult<Vec<DocumentPositionType>> {
        self.db.position_types().list().await
    }

    // =========================================================================
    // Documents
    // =========================================================================

    pub async fn document(&self, id: i64) -> DbResult<Document> {
        self.db.documents().get(id).await
    }

    /// Document `id` with its totals per position type (every type is
    /// listed, including those without positions).
    pub async fn document_view(&self, id: i64) -> DbResult<DocumentView> {
        let document = self.document(id).await?;

        let types = match self.position_types().await {
            Ok(types) => types,
            Err(err) if err.is_not_found() => Vec::new(),
            Err(err) => return Err(err),
        };

        let totals = types
            .into_iter()
            .map(|kind| PositionTotal {
                amount: document.total_for(kind.id),
                description: kind.description,
            })
            .collect();

        Ok(DocumentView { document, totals })
    }

    pub async fn documents(&self, filter: DocumentFilter) -> DbResult<Vec<Document>> {
        self.db.documents().list(&filter).await
    }

    pub async fn create_document(&self, params: DocumentParams) -> DbResult<Document> {
        self.db.documents().create(&params).await
    }

    pub async fn update_document(&self, id: i64, params: DocumentParams) -> DbResult<Document> {
        self.db.documents().update(id, &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apex_core::{DocumentHeaderParams, DocumentPositionParams};
    use apex_db::DbConfig;
    use chrono::NaiveDate;

    fn position(type_id: i64, amount: i64) -> DocumentPositionParams {
        DocumentPositionParams {
            account_id: 1,
            type_id,
            amount,
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_document_view_totals_per_type() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let service = AccountingService::new(db);
        service
            .create_account(AccountParams {
                description: "Cash".to_string(),
            })
            .await
            .unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let document = service
            .create_document(DocumentParams {
                header: DocumentHeaderParams {
                    date,
                    posting_date: date,
                    reference: "INV-1".to_string(),
                    description: String::new(),
                    currency_id: 1,
                },
                positions: vec![position(1, 1000), position(1, 250)],
            })
            .await
            .unwrap();

        let view = service.document_view(document.header.id).await.unwrap();

        assert_eq!(view.document, document);
        assert_eq!(
            view.totals,
            vec![
                PositionTotal {
                    description: "Debit".to_string(),
                    amount: Money::from_minor(1250),
                },
                PositionTotal {
                    description: "Credit".to_string(),
                    amount: Money::from_minor(0),
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_document_view_missing_is_not_found() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let service = AccountingService::new(db);

        let result = service.document_view(7).await;
        assert!(result.is_err_and(|err| err.is_not_found()));
    }
}
