//! API route configuration.

use crate::api::handlers::{
    create_choreography_handler, list_choreographies_handler, replace_markers_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};

/// Choreography routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET  /choreographies`              - List all choreographies
/// - `POST /choreographies`              - Create a choreography
/// - `PUT  /choreographies/{id}/markers` - Replace a choreography's markers
pub fn choreography_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/choreographies",
            get(list_choreographies_handler).post(create_choreography_handler),
        )
        .route("/choreographies/{id}/markers", put(replace_markers_handler))
}
