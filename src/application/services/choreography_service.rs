//! Choreography creation, listing, and marker replacement.

use std::sync::Arc;

use mongodb::bson::Document;
use serde_json::json;

use crate::domain::entities::{Marker, NewChoreography};
use crate::domain::repositories::{ChoreographyRepository, ConnectionState};
use crate::error::{AppError, StoreError};

/// Store state as seen by the diagnostics endpoint.
#[derive(Debug)]
pub struct StoreStatus {
    pub state: ConnectionState,
    pub collections: Result<Vec<String>, StoreError>,
}

/// Service over the choreography repository.
///
/// Inputs are already validated by the API layer; this service only turns
/// repository outcomes into [`AppError`]s.
pub struct ChoreographyService {
    repository: Arc<dyn ChoreographyRepository>,
}

impl ChoreographyService {
    /// Creates a new choreography service.
    pub fn new(repository: Arc<dyn ChoreographyRepository>) -> Self {
        Self { repository }
    }

    /// Stores a new choreography and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on any store failure.
    pub async fn create(&self, new_choreography: NewChoreography) -> Result<String, AppError> {
        let id = self.repository.create(new_choreography).await?;
        tracing::info!(id = %id, "Choreography created");
        Ok(id)
    }

    /// Returns every stored choreography document.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on any store failure.
    pub async fn list(&self) -> Result<Vec<Document>, AppError> {
        Ok(self.repository.list_all().await?)
    }

    /// Replaces the markers of the choreography with `id`.
    ///
    /// # Errors
    ///
    /// - [`AppError::BadRequest`] if `id` is malformed
    /// - [`AppError::NotFound`] if no choreography has this id
    /// - [`AppError::Internal`] on other store failures
    pub async fn replace_markers(&self, id: &str, markers: Vec<Marker>) -> Result<(), AppError> {
        let count = markers.len();
        let matched = self.repository.replace_markers(id, markers).await?;

        if !matched {
            return Err(AppError::not_found(
                "Choreography not found",
                json!({ "id": id }),
            ));
        }

        tracing::info!(id, markers = count, "Choreography markers replaced");
        Ok(())
    }

    /// Checks the store for diagnostics. Never fails.
    ///
    /// Collections are only listed when a database handle exists.
    pub async fn store_status(&self) -> StoreStatus {
        let state = self.repository.connection_state();
        let collections = if state.is_connected() {
            self.repository.collection_names().await
        } else {
            Err(StoreError::Unavailable)
        };

        StoreStatus { state, collections }
    }
}
