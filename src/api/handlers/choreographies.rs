//! Handlers for choreography endpoints (list, create, replace markers).

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::choreography::{
    ChoreographyListResponse, CreateChoreographyRequest, CreateChoreographyResponse,
    ReplaceMarkersRequest, ReplaceMarkersResponse,
};
use crate::api::extract::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::bson_json::document_to_json;

/// Lists all choreographies.
///
/// # Endpoint
///
/// `GET /api/choreographies`
///
/// # Response
///
/// ```json
/// {
///   "items": [
///     {
///       "_id": "65f1c2a9e4b0a1b2c3d4e5f6",
///       "title": "Opening number",
///       "audio_url": null,
///       "bpm": 128.0,
///       "markers": [{ "time": 0.0, "label": "Intro", "count": 1 }],
///       "created_at": "2026-03-01T10:00:00Z",
///       "updated_at": "2026-03-01T10:00:00Z"
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 500 Internal Server Error on any store failure.
pub async fn list_choreographies_handler(
    State(state): State<AppState>,
) -> Result<Json<ChoreographyListResponse>, AppError> {
    let documents = state.choreography_service.list().await?;

    Ok(Json(ChoreographyListResponse {
        items: documents.into_iter().map(document_to_json).collect(),
    }))
}

/// Creates a choreography.
///
/// # Endpoint
///
/// `POST /api/choreographies`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Opening number",
///   "audio_url": "https://cdn.example.com/track.mp3",  // optional
///   "bpm": 128,                                       // optional, 30..=300
///   "markers": [{ "time": 0.0, "label": "Intro", "count": 1 }]  // optional
/// }
/// ```
///
/// # Errors
///
/// Returns 422 Unprocessable Entity if the body fails validation.
/// Returns 500 Internal Server Error on store failure.
pub async fn create_choreography_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateChoreographyRequest>,
) -> Result<Json<CreateChoreographyResponse>, AppError> {
    let id = state.choreography_service.create(payload.into()).await?;

    Ok(Json(CreateChoreographyResponse { id }))
}

/// Replaces the whole markers array of a choreography.
///
/// # Endpoint
///
/// `PUT /api/choreographies/{id}/markers`
///
/// # Request Body
///
/// ```json
/// { "markers": [{ "time": 1.5, "label": "Kick", "count": 8 }] }
/// ```
///
/// The stored array becomes exactly the given one; nothing is merged.
///
/// # Errors
///
/// - 422 Unprocessable Entity if the body fails validation
/// - 400 Bad Request if `id` is not a valid identifier
/// - 404 Not Found if no choreography has this id
/// - 500 Internal Server Error on other store failures
pub async fn replace_markers_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<ReplaceMarkersRequest>,
) -> Result<Json<ReplaceMarkersResponse>, AppError> {
    state
        .choreography_service
        .replace_markers(&id, payload.into_markers())
        .await?;

    Ok(Json(ReplaceMarkersResponse { success: true }))
}
