//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`      - Liveness probe
//! - `GET  /test`  - Store diagnostics (always 200)
//! - `/api/*`      - Choreography REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin, method, and header
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{diagnostics_handler, liveness_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware, without path normalization.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(liveness_handler))
        .route("/test", get(diagnostics_handler))
        .nest("/api", api::routes::choreography_routes())
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Constructs the application router served by [`crate::server::run`].
///
/// Trailing slashes are trimmed before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
