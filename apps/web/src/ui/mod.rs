//! # Server-Rendered UI
//!
//! The building blocks the module routers are assembled from.
//!
//! - [`handlers`] - Generic handler factories (list, detail, create, update)
//! - [`params`] - Query string and form body coercion
//! - [`templates`] - The template registry

pub mod handlers;
pub mod params;
pub mod templates;

pub use handlers::{
    create, create_view, create_view_with, create_with_parser, detail, detail_with, list_view,
    reference, static_view, update, update_with_parser, Extras, UiState,
};
pub use params::{FormData, QueryParams};
pub use templates::Templates;
