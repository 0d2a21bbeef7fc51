//! # Filter Query Builder
//!
//! Turns a filter struct of optional fields into one parameterized `SELECT`.
//!
//! ## Null-Neutralized Predicates
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ItemFilter { name: Some("Bo%"), category_id: None, .. }                │
//! │                                                                         │
//! │  SELECT * FROM logistics_items WHERE 1 = 1                              │
//! │    AND (name LIKE ? OR ? IS NULL)          ← 'Bo%', 'Bo%'               │
//! │    AND (category_id = ? OR ? IS NULL)      ← NULL, NULL  (always true)  │
//! │    ...                                                                  │
//! │  ORDER BY id ASC                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every predicate is always emitted. An unset field binds `NULL` twice,
//! which makes its clause true, so a filter with no fields set returns the
//! same rows as an unfiltered query.
//!
//! ## Child Rows
//! ```text
//! SELECT * FROM accounting_document_positions
//! WHERE document_id IN (SELECT id FROM accounting_documents WHERE 1 = 1
//!     AND (reference LIKE ? OR ? IS NULL)    ← same predicates as the parents
//! ) ORDER BY document_id, id
//! ```
//!
//! The bind count depends on the filter only, never on how many parent rows
//! match.

use sqlx::query::QueryAs;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Encode, FromRow, QueryBuilder, Sqlite, Type};

/// A `SELECT * FROM table` with optional per-column constraints.
///
/// ## Example
/// ```rust,ignore
/// let mut query = FilterQuery::select("logistics_items")
///     .like("name", filter.name.clone())
///     .matches("category_id", filter.category_id)
///     .order_by_id();
///
/// let items = fetch_many(&pool, query.build_query_as::<Item>()).await?;
/// ```
pub struct FilterQuery<'args> {
    builder: QueryBuilder<'args, Sqlite>,

    /// A child select still has its `IN (` subquery open.
    open: bool,
}

impl<'args> FilterQuery<'args> {
    /// Starts a query over every row of `table`.
    pub fn select(table: &str) -> Self {
        let mut builder = QueryBuilder::new("SELECT * FROM ");
        builder.push(table).push(" WHERE 1 = 1");
        FilterQuery {
            builder,
            open: false,
        }
    }

    /// Starts a query over the rows of `table` whose `foreign_key` points at
    /// a row of `parent`. The predicates added next constrain the parents.
    pub fn select_children(table: &str, foreign_key: &str, parent: &str) -> Self {
        let mut builder = QueryBuilder::new("SELECT * FROM ");
        builder
            .push(table)
            .push(" WHERE ")
            .push(foreign_key)
            .push(" IN (SELECT id FROM ")
            .push(parent)
            .push(" WHERE 1 = 1");
        FilterQuery {
            builder,
            open: true,
        }
    }

    /// Adds `AND (column = ? OR ? IS NULL)`.
    pub fn matches<T>(mut self, column: &str, value: Option<T>) -> Self
    where
        T: 'args + Encode<'args, Sqlite> + Type<Sqlite> + Clone + Send,
    {
        self.push_predicate(column, "=", value);
        self
    }

    /// Adds `AND (column LIKE ? OR ? IS NULL)`.
    pub fn like(mut self, column: &str, pattern: Option<String>) -> Self {
        self.push_predicate(column, "LIKE", pattern);
        self
    }

    pub fn order_by_id(self) -> Self {
        self.order_by("id ASC")
    }

    /// Adds `ORDER BY columns`, closing a child subquery first.
    pub fn order_by(mut self, columns: &str) -> Self {
        self.close();
        self.builder.push(" ORDER BY ").push(columns);
        self
    }

    /// The SQL text built so far.
    pub fn sql(&self) -> &str {
        self.builder.sql()
    }

    /// Finishes the statement as a typed query.
    pub fn build_query_as<'q, T>(&'q mut self) -> QueryAs<'q, Sqlite, T, SqliteArguments<'args>>
    where
        T: for<'r> FromRow<'r, SqliteRow>,
    {
        self.close();
        self.builder.build_query_as::<T>()
    }

    fn close(&mut self) {
        if self.open {
            self.builder.push(")");
            self.open = false;
        }
    }

    fn push_predicate<T>(&mut self, column: &str, op: &str, value: Option<T>)
    where
        T: 'args + Encode<'args, Sqlite> + Type<Sqlite> + Clone + Send,
    {
        self.builder
            .push(" AND (")
            .push(column)
            .push(" ")
            .push(op)
            .push(" ")
            .push_bind(value.clone())
            .push(" OR ")
            .push_bind(value)
            .push(" IS NULL)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_predicate_is_emitted() {
        let query = FilterQuery::select("logistics_items")
            .like("name", None)
            .matches("category_id", Some(1_i64))
            .order_by_id();

        assert_eq!(
            query.sql(),
            "SELECT * FROM logistics_items WHERE 1 = 1 \
             AND (name LIKE ? OR ? IS NULL) \
             AND (category_id = ? OR ? IS NULL) \
             ORDER BY id ASC"
        );
    }

    #[test]
    fn test_child_select_constrains_parents() {
        let query = FilterQuery::select_children(
            "accounting_document_positions",
            "document_id",
            "accounting_documents",
        )
        .matches("currency_id", Some(2_i64))
        .order_by("document_id, id");

        assert_eq!(
            query.sql(),
            "SELECT * FROM accounting_document_positions \
             WHERE document_id IN (SELECT id FROM accounting_documents WHERE 1 = 1 \
             AND (currency_id = ? OR ? IS NULL)) \
             ORDER BY document_id, id"
        );
    }

    #[test]
    fn test_bare_select() {
        let query = FilterQuery::select("accounting_accounts");
        assert_eq!(query.sql(), "SELECT * FROM accounting_accounts WHERE 1 = 1");
    }
}
