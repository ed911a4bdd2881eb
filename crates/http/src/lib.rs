//! HTTP API server for ice cream flavors.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod api_error;
mod handlers;
mod response_types;

use axum::{Json, Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use flavors_service::FlavorService;

pub use response_types::VersionResponse;

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Service for flavor CRUD
    pub flavor_service: Arc<FlavorService>,
}

impl AppState {
    pub fn new(flavor_service: Arc<FlavorService>) -> Self {
        Self { flavor_service }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route(
            "/api/flavors",
            get(handlers::flavors::list_flavors).post(handlers::flavors::create_flavor),
        )
        .route(
            "/api/flavors/{id}",
            get(handlers::flavors::get_flavor)
                .put(handlers::flavors::update_flavor)
                .delete(handlers::flavors::delete_flavor),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
