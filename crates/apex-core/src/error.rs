//! # Error Types
//!
//! The error taxonomy shared by every layer of Apex.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  apex-core (this file)                                                  │
//! │  ├── ErrorKind        - NotFound | BadRequest | Internal                │
//! │  └── ValidationError  - query string / form coercion failures           │
//! │                                                                         │
//! │  apex-db (separate crate)                                               │
//! │  └── DbError          - wraps sqlx errors, classified into ErrorKind    │
//! │                                                                         │
//! │  apps/web                                                               │
//! │  └── AppError         - ErrorKind + message, rendered as 404/400/500    │
//! │                                                                         │
//! │  Flow: sqlx::Error → DbError ─┐                                         │
//! │        ValidationError ───────┴──► AppError → HTTP status               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers only ever branch on [`ErrorKind`]; driver details stay in logs.

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Error Kind
// =============================================================================

/// The three error kinds visible at the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The record (or every record matching a filter) does not exist.
    NotFound,

    /// The request could not be coerced into the expected types.
    BadRequest,

    /// Anything else. Catch-all.
    Internal,
}

impl ErrorKind {
    /// Short client-facing message for this kind.
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not found",
            ErrorKind::BadRequest => "bad request",
            ErrorKind::Internal => "internal error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input coercion errors.
///
/// Raised while turning query strings and hand-parsed form bodies into typed
/// filters and params. Always classified as [`ErrorKind::BadRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing.
    #[error("{field} is required")]
    Required { field: String },

    /// The value could not be parsed into the field's type.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Repeated form fields that describe one list have different lengths.
    ///
    /// ## When This Occurs
    /// ```text
    /// positions[].account_id = 1, 2
    /// positions[].amount     = 100        ← one value short
    /// ```
    #[error("{field} has {found} values, expected {expected}")]
    LengthMismatch {
        field: String,
        expected: usize,
        found: usize,
    },
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::BadRequest
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
