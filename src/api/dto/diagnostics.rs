//! DTOs for the liveness and diagnostics endpoints.

use serde::Serialize;

/// Response for `GET /`.
#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub message: &'static str,
}

/// Response for `GET /test`.
///
/// Reports whether configuration is present without echoing its values.
#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}
