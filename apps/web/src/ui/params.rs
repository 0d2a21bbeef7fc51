//! # Request Input Parsing
//!
//! Query strings and hand-parsed form bodies, with type coercion into the
//! shapes filters and params need.
//!
//! ```text
//! ?name=Bolt&category_id=&gross_price=12x
//!     │
//!     ▼  QueryParams::from_query
//!   text("name")        → Some("Bolt")
//!   int("category_id")  → Ok(None)          blank counts as absent
//!   int("gross_price")  → Err(InvalidFormat) → 400
//! ```

use std::collections::HashMap;

use apex_core::ValidationError;
use chrono::NaiveDate;

/// Message of the 400 for a path id that is not an integer.
pub const MALFORMED_ID: &str = "malformatted id";

/// Parses a path-embedded record id.
pub fn parse_id(raw: &str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::invalid_format("id", MALFORMED_ID))
}

fn parse_int(field: &str, raw: &str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|e| ValidationError::invalid_format(field, e.to_string()))
}

// =============================================================================
// Query String
// =============================================================================

/// Decoded query string. A repeated key keeps its last value.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    values: HashMap<String, String>,
}

impl QueryParams {
    pub fn from_query(raw: Option<&str>) -> Self {
        let values = raw
            .map(|raw| url::form_urlencoded::parse(raw.as_bytes()).into_owned().collect())
            .unwrap_or_default();

        QueryParams { values }
    }

    /// Non-blank text value of `key`.
    pub fn text(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    /// Integer value of `key`; blank or missing is `None`.
    pub fn int(&self, key: &str) -> Result<Option<i64>, ValidationError> {
        self.text(key).map(|value| parse_int(key, &value)).transpose()
    }
}

// =============================================================================
// Form Body
// =============================================================================

/// Decoded `application/x-www-form-urlencoded` body that keeps repeated keys
/// in submission order.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    pub fn parse(body: &[u8]) -> Self {
        FormData {
            pairs: url::form_urlencoded::parse(body).into_owned().collect(),
        }
    }

    /// First value of `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value of `key`, in order.
    pub fn all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Value of `key`; may be empty but must be present.
    pub fn text(&self, key: &str) -> Result<String, ValidationError> {
        self.first(key)
            .map(str::to_string)
            .ok_or_else(|| ValidationError::required(key))
    }

    pub fn int(&self, key: &str) -> Result<i64, ValidationError> {
        match self.first(key).map(str::trim) {
            Some(value) if !value.is_empty() => parse_int(key, value),
            _ => Err(ValidationError::required(key)),
        }
    }

    /// ISO date (`YYYY-MM-DD`), as sent by `<input type="date">`.
    pub fn date(&self, key: &str) -> Result<NaiveDate, ValidationError> {
        match self.first(key).map(str::trim) {
            Some(value) if !value.is_empty() => NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map_err(|e| ValidationError::invalid_format(key, e.to_string())),
            _ => Err(ValidationError::required(key)),
        }
    }

    /// Every value of a repeated integer key.
    pub fn ints(&self, key: &str) -> Result<Vec<i64>, ValidationError> {
        self.all(key)
            .into_iter()
            .map(|value| parse_int(key, value))
            .collect()
    }
}
