//! # Repository Module
//!
//! One repository per entity. Each holds a pool handle and composes SQL over
//! the [`fetch_one`](crate::query::fetch_one) / [`fetch_many`](crate::query::fetch_many)
//! helpers.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Service (apps/web)                                                     │
//! │       │  db.items().list(&filter)                                       │
//! │       ▼                                                                 │
//! │  ItemRepository                                                         │
//! │  ├── get(id)            static:  SELECT * ... WHERE id = ?              │
//! │  ├── list(filter)       dynamic: FilterQuery, ORDER BY id               │
//! │  ├── create(params)     INSERT ... RETURNING *                          │
//! │  └── update(id, params) UPDATE ... WHERE id = ? RETURNING *             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database                                                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ItemRepository`], [`ItemCategoryRepository`] - logistics goods
//! - [`AddressRepository`], [`PlantRepository`] - logistics sites
//! - [`AccountRepository`] - chart of accounts
//! - [`CurrencyRepository`], [`PositionTypeRepository`] - accounting reference data
//! - [`DocumentRepository`] - ledger documents with positions

pub mod account;
pub mod address;
pub mod category;
pub mod currency;
pub mod document;
pub mod item;
pub mod plant;
pub mod position_type;

pub use account::AccountRepository;
pub use address::AddressRepository;
pub use category::ItemCategoryRepository;
pub use currency::CurrencyRepository;
pub use document::DocumentRepository;
pub use item::ItemRepository;
pub use plant::PlantRepository;
pub use position_type::PositionTypeRepository;
