//! DTOs for choreography endpoints.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use validator::Validate;

use crate::domain::entities::{Marker, NewChoreography};

/// A timeline marker as sent by clients.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MarkerPayload {
    /// Seconds from the start of the audio.
    #[validate(range(min = 0.0, message = "time must be >= 0"))]
    pub time: f64,

    /// Short name, e.g. "Verse A".
    pub label: Option<String>,

    /// Optional 8-count number or beats. `8.0` is read as `8`.
    #[serde(default, deserialize_with = "integral_count")]
    #[validate(range(min = 1, max = 64, message = "count must be between 1 and 64"))]
    pub count: Option<i64>,
}

/// Reads an optional count, accepting floats with no fractional part.
fn integral_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if let Some(count) = number.as_i64() {
        return Ok(Some(count));
    }

    match number.as_f64() {
        Some(value) if value.fract() == 0.0 && value.abs() < i64::MAX as f64 => {
            Ok(Some(value as i64))
        }
        _ => Err(serde::de::Error::custom(format!(
            "count must be a whole number, got {number}"
        ))),
    }
}

impl From<MarkerPayload> for Marker {
    fn from(payload: MarkerPayload) -> Self {
        Marker::new(payload.time, payload.label, payload.count)
    }
}

/// Request body for `POST /api/choreographies`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateChoreographyRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,

    /// Public URL of the audio file.
    pub audio_url: Option<String>,

    #[validate(range(min = 30.0, max = 300.0, message = "bpm must be between 30 and 300"))]
    pub bpm: Option<f64>,

    #[serde(default)]
    #[validate(nested)]
    pub markers: Vec<MarkerPayload>,
}

impl From<CreateChoreographyRequest> for NewChoreography {
    fn from(request: CreateChoreographyRequest) -> Self {
        NewChoreography {
            title: request.title,
            audio_url: request.audio_url,
            bpm: request.bpm,
            markers: request.markers.into_iter().map(Marker::from).collect(),
        }
    }
}

/// Request body for `PUT /api/choreographies/{id}/markers`.
///
/// The array replaces the stored one entirely, in the given order.
#[derive(Debug, Deserialize, Validate)]
pub struct ReplaceMarkersRequest {
    #[validate(nested)]
    pub markers: Vec<MarkerPayload>,
}

impl ReplaceMarkersRequest {
    pub fn into_markers(self) -> Vec<Marker> {
        self.markers.into_iter().map(Marker::from).collect()
    }
}

/// Response for `GET /api/choreographies`.
///
/// Items are the stored documents with `_id` rendered as text.
#[derive(Debug, Serialize)]
pub struct ChoreographyListResponse {
    pub items: Vec<Value>,
}

/// Response for `POST /api/choreographies`.
#[derive(Debug, Serialize)]
pub struct CreateChoreographyResponse {
    pub id: String,
}

/// Response for `PUT /api/choreographies/{id}/markers`.
#[derive(Debug, Serialize)]
pub struct ReplaceMarkersResponse {
    pub success: bool,
}
