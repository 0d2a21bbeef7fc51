//! # apex-core: Domain Records for Apex
//!
//! Records, parameter and filter types for the logistics and accounting
//! modules. No I/O happens here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Apex Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/web (apex-web)                          │   │
//! │  │   routers ──► generic handlers ──► services ──► templates       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apex-db (Database Layer)                     │   │
//! │  │       SQLite pool, migrations, filter builder, repositories     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ apex-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │ logistics │  │accounting │  │ resource  │  │   error   │   │   │
//! │  │   │   Item    │  │  Account  │  │ id + path │  │ ErrorKind │   │   │
//! │  │   │   Plant   │  │ Document  │  │           │  │           │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`logistics`] - Items, categories, addresses, plants
//! - [`accounting`] - Accounts, currencies, documents and their positions
//! - [`resource`] - The capability the generic handlers need from a record
//! - [`money`] - Minor-unit amounts
//! - [`error`] - Error taxonomy

// =============================================================================
// Module Declarations
// =============================================================================

pub mod accounting;
pub mod error;
pub mod logistics;
pub mod money;
pub mod resource;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use accounting::*;
pub use error::{ErrorKind, ValidationError};
pub use logistics::*;
pub use money::Money;
pub use resource::Resource;
