//! # apex-db: Database Layer for Apex
//!
//! This crate provides database access for the logistics and accounting
//! modules. It uses SQLite with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Apex Data Flow                                 │
//! │                                                                         │
//! │  HTTP handler ──► service (apps/web)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     apex-db (THIS CRATE)                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐   │   │
//! │  │   │   Database    │    │ Repositories  │    │  Migrations  │   │   │
//! │  │   │   (pool.rs)   │◄───│ items, plants │    │  schema +    │   │   │
//! │  │   │  SqlitePool   │    │ accounts, ... │    │  fixtures    │   │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘   │   │
//! │  │                                │                                │   │
//! │  │                    ┌───────────▼───────────┐                    │   │
//! │  │                    │ query.rs   filter.rs  │                    │   │
//! │  │                    │ fetch_one  FilterQuery│                    │   │
//! │  │                    │ fetch_many            │                    │   │
//! │  │                    └───────────────────────┘                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite (file, or sqlite::memory: in tests)                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded schema and fixture migrations
//! - [`query`] - `fetch_one` / `fetch_many` (empty result = NotFound)
//! - [`filter`] - Optional-field filter to SQL predicate builder
//! - [`error`] - Database error types
//! - [`repository`] - One repository per entity
//!
//! ## Usage
//!
//! ```rust,ignore
//! use apex_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("sqlite://apex.db")).await?;
//! let items = db.items().list(&ItemFilter::default()).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod filter;
pub mod migrations;
pub mod pool;
pub mod query;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use filter::FilterQuery;
pub use pool::{Database, DbConfig};
pub use query::{fetch_many, fetch_one};

pub use repository::{
    AccountRepository, AddressRepository, CurrencyRepository, DocumentRepository,
    ItemCategoryRepository, ItemRepository, PlantRepository, PositionTypeRepository,
};
