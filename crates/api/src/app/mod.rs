//! HTTP application wiring (Axum router + shared store).
//!
//! - `routes/`: HTTP routes + handlers (one file per surface)
//! - `dto.rs`: form and JSON request/response shapes
//! - `render.rs`: HTML page rendering
//! - `errors.rs`: consistent JSON error responses

use std::sync::Arc;

use axum::{Extension, Router};

use stocklist_inventory::ItemStore;

pub mod dto;
pub mod errors;
pub mod render;
pub mod routes;

/// Store handle shared by every handler.
pub type SharedStore = Arc<dyn ItemStore>;

/// Build the full HTTP router (public entrypoint used by the server).
pub fn build_app(store: SharedStore) -> Router {
    routes::router().layer(Extension(store))
}
