//! # Apex Web
//!
//! Server-rendered back office for the logistics and accounting records,
//! plus a JSON API for logistics items.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                             Apex Web                                    │
//! │                                                                         │
//! │  HTTP ──► TraceLayer ──► Router                                         │
//! │                            ├── /logistics        ui::* factories        │
//! │                            ├── /accounting       ui::* factories        │
//! │                            ├── /api/logistics    JSON handlers          │
//! │                            └── /health                                  │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │              LogisticsService / AccountingService                       │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                      apex-db repositories ──► SQLite                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! `apex.toml` (optional) overridden by `APEX_*` environment variables. See
//! [`config::WebConfig`].

pub mod accounting;
pub mod config;
pub mod error;
pub mod logistics;
pub mod services;
pub mod ui;

use apex_db::Database;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

pub use config::WebConfig;
pub use error::AppError;
pub use services::{AccountingService, LogisticsService};
pub use ui::{Templates, UiState};

/// Builds the complete application router.
///
/// ## Arguments
/// * `db` - Opened (and migrated) database
/// * `templates` - Parsed template registry
pub fn app(db: Database, templates: Templates) -> Router {
    let logistics = LogisticsService::new(db.clone());
    let accounting = AccountingService::new(db.clone());

    Router::new()
        .route("/", get(index))
        .route("/health", get(health).with_state(db))
        .nest(
            "/logistics",
            logistics::ui::router(UiState::new(logistics.clone(), templates.clone())),
        )
        .nest(
            "/accounting",
            accounting::ui::router(UiState::new(accounting, templates)),
        )
        .nest("/api/logistics", logistics::api::router(logistics))
        .layer(TraceLayer::new_for_http())
}

async fn index() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/logistics")])
}

async fn health(State(db): State<Database>) -> impl IntoResponse {
    if db.health_check().await {
        (StatusCode::OK, "OK")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "database unavailable")
    }
}
