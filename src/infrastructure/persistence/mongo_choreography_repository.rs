//! MongoDB implementation of the choreography repository.

use async_trait::async_trait;
use mongodb::bson::{self, Document};
use std::sync::Arc;

use crate::domain::entities::{CHOREOGRAPHY_COLLECTION, Marker, NewChoreography};
use crate::domain::repositories::{ChoreographyRepository, ConnectionState};
use crate::error::StoreError;
use crate::infrastructure::persistence::DocumentStore;

/// Choreography storage in the `choreography` collection.
pub struct MongoChoreographyRepository {
    store: Arc<DocumentStore>,
}

impl MongoChoreographyRepository {
    /// Creates a new repository over a shared document store.
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ChoreographyRepository for MongoChoreographyRepository {
    async fn create(&self, new_choreography: NewChoreography) -> Result<String, StoreError> {
        self.store
            .insert(CHOREOGRAPHY_COLLECTION, &new_choreography)
            .await
    }

    async fn list_all(&self) -> Result<Vec<Document>, StoreError> {
        self.store.find_all(CHOREOGRAPHY_COLLECTION).await
    }

    async fn replace_markers(&self, id: &str, markers: Vec<Marker>) -> Result<bool, StoreError> {
        let markers = bson::to_bson(&markers).map_err(|e| StoreError::Write(e.to_string()))?;

        self.store
            .set_field(CHOREOGRAPHY_COLLECTION, id, "markers", markers)
            .await
    }

    fn connection_state(&self) -> ConnectionState {
        self.store.connection_state()
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        self.store.collection_names().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disconnected_repository() -> MongoChoreographyRepository {
        MongoChoreographyRepository::new(Arc::new(DocumentStore::disconnected()))
    }

    #[tokio::test]
    async fn test_disconnected_repository_reports_unavailable() {
        let repo = disconnected_repository();

        assert_eq!(repo.connection_state(), ConnectionState::NotConfigured);
        assert!(matches!(repo.list_all().await, Err(StoreError::Unavailable)));

        let new_choreography = NewChoreography {
            title: "Routine".to_string(),
            audio_url: None,
            bpm: None,
            markers: vec![],
        };
        assert!(matches!(
            repo.create(new_choreography).await,
            Err(StoreError::Unavailable)
        ));
    }

    #[test]
    fn test_failed_store_state_passes_through() {
        let repo =
            MongoChoreographyRepository::new(Arc::new(DocumentStore::failed("bad scheme")));

        assert_eq!(
            repo.connection_state(),
            ConnectionState::InitFailed("bad scheme".to_string())
        );
    }

    #[tokio::test]
    async fn test_replace_markers_rejects_malformed_id() {
        let repo = disconnected_repository();

        let result = repo
            .replace_markers("not-an-id", vec![Marker::new(1.0, None, None)])
            .await;

        assert!(matches!(result, Err(StoreError::InvalidIdentifier(_))));
    }
}
