//! Handlers for liveness and diagnostics endpoints.

use axum::{Json, extract::State};

use crate::api::dto::diagnostics::{DiagnosticsResponse, LivenessResponse};
use crate::domain::repositories::ConnectionState;
use crate::state::AppState;

/// Number of collection names reported by diagnostics.
const MAX_REPORTED_COLLECTIONS: usize = 10;

/// Length limit for store error text in diagnostics.
const MAX_ERROR_CHARS: usize = 50;

/// Liveness probe.
///
/// # Endpoint
///
/// `GET /`
pub async fn liveness_handler() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        message: "Choreography API is running",
    })
}

/// Reports store connectivity and configuration presence.
///
/// # Endpoint
///
/// `GET /test`
///
/// Always answers 200 OK, even when the store is unreachable. Configuration
/// values are never echoed, only whether they are set.
///
/// # Response
///
/// ```json
/// {
///   "backend": "running",
///   "database": "connected",
///   "database_url": "set",
///   "database_name": "set",
///   "connection_status": "connected",
///   "collections": ["choreography"]
/// }
/// ```
pub async fn diagnostics_handler(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let status = state.choreography_service.store_status().await;

    let connected = status.state.is_connected();

    let (database, collections) = match (status.state, status.collections) {
        (ConnectionState::NotConfigured, _) => ("not configured".to_string(), Vec::new()),
        (ConnectionState::InitFailed(reason), _) => (
            format!("client initialization failed: {}", truncate(&reason)),
            Vec::new(),
        ),
        (ConnectionState::Connected, Ok(mut names)) => {
            names.truncate(MAX_REPORTED_COLLECTIONS);
            ("connected".to_string(), names)
        }
        (ConnectionState::Connected, Err(e)) => {
            tracing::warn!(error = %e, "Listing collections for diagnostics failed");
            (
                format!("connected but error: {}", truncate(&e.to_string())),
                Vec::new(),
            )
        }
    };

    Json(DiagnosticsResponse {
        backend: "running".to_string(),
        database,
        database_url: presence(state.store_config.database_url),
        database_name: presence(state.store_config.database_name),
        connection_status: if connected {
            "connected"
        } else {
            "not connected"
        }
        .to_string(),
        collections,
    })
}

fn truncate(text: &str) -> String {
    text.chars().take(MAX_ERROR_CHARS).collect()
}

fn presence(set: bool) -> String {
    if set { "set" } else { "not set" }.to_string()
}
