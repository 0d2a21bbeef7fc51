//! # Accounting Module
//!
//! Chart of accounts and ledger documents under `/accounting`.
//!
//! ## Document Form
//! ```text
//! date=2024-03-01&posting_date=2024-03-02&reference=INV-1&description=...&currency_id=1
//! &positions[].account_id=1&positions[].type_id=1&positions[].amount=1000&positions[].description=...
//! &positions[].account_id=2&positions[].type_id=2&positions[].amount=1000&positions[].description=...
//!                │
//!                ▼  document_params
//! DocumentParams { header, positions: [row 0, row 1] }
//! ```
//!
//! The four `positions[]` lists are zipped by index and must have the same
//! length. A row whose four values are all blank is the form's empty spare
//! row and is skipped.

pub mod ui;

use apex_core::{
    AccountFilter, DocumentFilter, DocumentHeaderParams, DocumentParams, DocumentPositionParams,
    ValidationError,
};

use crate::ui::{FormData, QueryParams};

const ACCOUNT_IDS: &str = "positions[].account_id";
const TYPE_IDS: &str = "positions[].type_id";
const AMOUNTS: &str = "positions[].amount";
const DESCRIPTIONS: &str = "positions[].description";

/// `?description=`
pub fn account_filter(query: &QueryParams) -> Result<AccountFilter, ValidationError> {
    Ok(AccountFilter {
        description: query.text("description"),
    })
}

/// `?reference=&currency_id=`
pub fn document_filter(query: &QueryParams) -> Result<DocumentFilter, ValidationError> {
    Ok(DocumentFilter {
        reference: query.text("reference"),
        currency_id: query.int("currency_id")?,
    })
}

/// Reads a document create/update form.
///
/// ## Returns
/// * `Err(Required | InvalidFormat)` - A header value is missing or malformed
/// * `Err(LengthMismatch)` - The position lists differ in length
pub fn document_params(form: &FormData) -> Result<DocumentParams, ValidationError> {
    let header = DocumentHeaderParams {
        date: form.date("date")?,
        posting_date: form.date("posting_date")?,
        reference: form.text("reference")?,
        description: form.text("description")?,
        currency_id: form.int("currency_id")?,
    };

    let account_ids = form.all(ACCOUNT_IDS);
    let type_ids = form.all(TYPE_IDS);
    let amounts = form.all(AMOUNTS);
    let descriptions = form.all(DESCRIPTIONS);

    let expected = account_ids.len();
    for (field, found) in [
        (TYPE_IDS, type_ids.len()),
        (AMOUNTS, amounts.len()),
        (DESCRIPTIONS, descriptions.len()),
    ] {
        if found != expected {
            return Err(ValidationError::LengthMismatch {
                field: field.to_string(),
                expected,
                found,
            });
        }
    }

    let mut positions = Vec::with_capacity(expected);
    for i in 0..expected {
        let row = [account_ids[i], type_ids[i], amounts[i], descriptions[i]];
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }

        positions.push(DocumentPositionParams {
            account_id: position_int(ACCOUNT_IDS, account_ids[i])?,
            type_id: position_int(TYPE_IDS, type_ids[i])?,
            amount: position_int(AMOUNTS, amounts[i])?,
            description: descriptions[i].to_string(),
        });
    }

    Ok(DocumentParams { header, positions })
}

fn position_int(field: &str, raw: &str) -> Result<i64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::required(field));
    }
    raw.parse::<i64>()
        .map_err(|e| ValidationError::invalid_format(field, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const HEADER: &str =
        "date=2024-03-01&posting_date=2024-03-02&reference=INV-1&description=Rent&currency_id=1";

    fn form(positions: &str) -> FormData {
        FormData::parse(format!("{HEADER}{positions}").as_bytes())
    }

    #[test]
    fn test_header_only() {
        let params = document_params(&form("")).unwrap();

        assert_eq!(params.header.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(params.header.reference, "INV-1");
        assert_eq!(params.header.currency_id, 1);
        assert!(params.positions.is_empty());
    }

    #[test]
    fn test_positions_zip_in_order() {
        let params = document_params(&form(
            "&positions[].account_id=1&positions[].type_id=1&positions[].amount=1000&positions[].description=debit\
             &positions[].account_id=2&positions[].type_id=2&positions[].amount=1000&positions[].description=credit",
        ))
        .unwrap();

        assert_eq!(params.positions.len(), 2);
        assert_eq!(params.positions[0].account_id, 1);
        assert_eq!(params.positions[0].description, "debit");
        assert_eq!(params.positions[1].type_id, 2);
        assert_eq!(params.positions[1].description, "credit");
    }

    #[test]
    fn test_mismatched_lists() {
        let err = document_params(&form(
            "&positions[].account_id=1&positions[].account_id=2\
             &positions[].type_id=1&positions[].amount=5&positions[].description=x",
        ))
        .unwrap_err();

        assert!(matches!(
            err,
            ValidationError::LengthMismatch { expected: 2, found: 1, .. }
        ));
    }

    #[test]
    fn test_blank_spare_row_is_skipped() {
        let params = document_params(&form(
            "&positions[].account_id=1&positions[].type_id=1&positions[].amount=5&positions[].description=x\
             &positions[].account_id=&positions[].type_id=&positions[].amount=&positions[].description=",
        ))
        .unwrap();

        assert_eq!(params.positions.len(), 1);
    }

    #[test]
    fn test_partial_row_is_rejected() {
        let err = document_params(&form(
            "&positions[].account_id=1&positions[].type_id=&positions[].amount=5&positions[].description=x",
        ))
        .unwrap_err();

        assert!(matches!(err, ValidationError::Required { .. }));
    }

    #[test]
    fn test_missing_header_value() {
        let form = FormData::parse(b"date=2024-03-01&reference=x&description=y&currency_id=1");
        assert!(document_params(&form).is_err());
    }

    #[test]
    fn test_document_filter() {
        let query = QueryParams::from_query(Some("reference=INV%25&currency_id=2"));
        let filter = document_filter(&query).unwrap();

        assert_eq!(filter.reference.as_deref(), Some("INV%"));
        assert_eq!(filter.currency_id, Some(2));
    }
}
