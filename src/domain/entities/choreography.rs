//! Choreography entity and its embedded timeline markers.

use serde::{Deserialize, Serialize};

/// Collection holding choreography documents.
pub const CHOREOGRAPHY_COLLECTION: &str = "choreography";

/// A point in time in the music with an optional label and beat count.
///
/// Markers have no identity of their own; they live inside a choreography's
/// `markers` array and are ordered by position, not by `time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Seconds from the start of the audio.
    pub time: f64,
    pub label: Option<String>,
    /// Optional 8-count number or beat count.
    pub count: Option<i64>,
}

impl Marker {
    pub fn new(time: f64, label: Option<String>, count: Option<i64>) -> Self {
        Self { time, label, count }
    }
}

/// Input data for creating a new choreography document.
///
/// The store assigns the identifier on insert.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewChoreography {
    pub title: String,
    pub audio_url: Option<String>,
    pub bpm: Option<f64>,
    pub markers: Vec<Marker>,
}
