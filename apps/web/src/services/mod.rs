//! # Services
//!
//! One service per module, sitting between the HTTP handlers and the
//! repositories.
//!
//! ```text
//! handler ──► LogisticsService::create_item(params) ──► db.items().create(params)
//!                       │                                        │
//!                       └──────────── same Result ◄──────────────┘
//! ```
//!
//! Every method forwards its arguments unchanged and returns the repository
//! result unchanged. Business rules that need orchestration (e.g. posting a
//! document to several ledgers) belong here once they exist.

pub mod accounting;
pub mod logistics;

pub use accounting::{AccountingService, DocumentView, PositionTotal};
pub use logistics::LogisticsService;
