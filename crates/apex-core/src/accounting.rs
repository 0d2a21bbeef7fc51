//! # Accounting Records
//!
//! Chart of accounts and ledger documents.
//!
//! ## Document Composition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Document                                                               │
//! │  ├── DocumentHeader                                                     │
//! │  │     id, date, posting_date, reference, description, currency_id      │
//! │  │                                                                      │
//! │  └── positions: Vec<DocumentPosition>      (ordered by id)              │
//! │        ├── { account_id, type_id, amount, description }                 │
//! │        ├── { account_id, type_id, amount, description }                 │
//! │        └── ...                                                          │
//! │                                                                         │
//! │  account_id ──► Account                                                 │
//! │  type_id    ──► DocumentPositionType   (Debit / Credit)                 │
//! │  currency_id ─► Currency               (EUR / USD)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A header and its positions are written together. An update replaces the
//! header and the complete set of positions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::resource::Resource;

// =============================================================================
// Account
// =============================================================================

/// A chart-of-accounts entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Account {
    pub id: i64,
    pub description: String,
}

impl Resource for Account {
    fn id(&self) -> i64 {
        self.id
    }

    fn redirect(&self) -> String {
        format!("/accounting/accounts/{}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountParams {
    pub description: String,
}

/// `description` is a `LIKE` pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountFilter {
    pub description: Option<String>,
}

// =============================================================================
// Reference Data
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Currency {
    pub id: i64,
    pub name: String,

    /// ISO 4217 code, e.g. `EUR`.
    pub iso: String,
}

/// Classifies a ledger line (debit-like or credit-like).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct DocumentPositionType {
    pub id: i64,
    pub description: String,
}

// =============================================================================
// Document
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct DocumentHeader {
    pub id: i64,

    /// Document date.
    pub date: NaiveDate,

    /// Date the document is booked on.
    pub posting_date: NaiveDate,

    /// External reference, e.g. an invoice number.
    pub reference: String,

    pub description: String,
    pub currency_id: i64,
}

/// One ledger line of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct DocumentPosition {
    pub id: i64,
    pub document_id: i64,
    pub account_id: i64,
    pub type_id: i64,

    /// Minor units of the document's currency.
    pub amount: i64,

    pub description: String,
}

impl DocumentPosition {
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_minor(self.amount)
    }
}

/// A header with its positions.
///
/// Serialized flat: header fields at the top level plus a `positions` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(flatten)]
    pub header: DocumentHeader,
    pub positions: Vec<DocumentPosition>,
}

impl Document {
    /// Sum of the amounts of all positions of the given type.
    pub fn total_for(&self, type_id: i64) -> Money {
        self.positions
            .iter()
            .filter(|p| p.type_id == type_id)
            .map(DocumentPosition::amount)
            .sum()
    }
}

impl Resource for Document {
    fn id(&self) -> i64 {
        self.header.id
    }

    fn redirect(&self) -> String {
        format!("/accounting/documents/{}", self.header.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentHeaderParams {
    pub date: NaiveDate,
    pub posting_date: NaiveDate,
    pub reference: String,
    pub description: String,
    pub currency_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPositionParams {
    pub account_id: i64,
    pub type_id: i64,
    pub amount: i64,
    pub description: String,
}

/// Full body of a document create or update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentParams {
    #[serde(flatten)]
    pub header: DocumentHeaderParams,
    pub positions: Vec<DocumentPositionParams>,
}

/// `reference` is a `LIKE` pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFilter {
    pub reference: Option<String>,
    pub currency_id: Option<i64>,
}

// =============================================================================
// Unit Tests
// =============================================================================
