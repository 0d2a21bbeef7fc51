//! # Resource Capability
//!
//! What a record must expose to be served by the generic UI handlers:
//! a stable identifier and the path it lives at.
//!
//! ```text
//! POST /logistics/items ──► create ──► Item { id: 7, .. }
//!                                          │
//!                                          ▼ redirect()
//!                              302 Location: /logistics/items/7
//! ```

/// A record served through the uniform CRUD handlers.
pub trait Resource {
    /// Store-assigned identifier. Immutable after creation.
    fn id(&self) -> i64;

    /// Canonical location of this record, without a trailing slash.
    fn redirect(&self) -> String;
}
