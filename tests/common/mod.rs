#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use choreography_api::domain::entities::{Marker, NewChoreography};
use choreography_api::domain::repositories::{ChoreographyRepository, ConnectionState};
use choreography_api::error::StoreError;
use choreography_api::infrastructure::persistence::{DocumentStore, MongoChoreographyRepository};
use choreography_api::routes::build_router;
use choreography_api::state::{AppState, StoreConfigPresence};
use mongodb::bson::{self, Bson, Document, doc, oid::ObjectId};
use std::sync::{Arc, Mutex};

/// Repository keeping documents in memory with the same id and matching
/// rules as the MongoDB implementation.
#[derive(Default)]
pub struct InMemoryChoreographyRepository {
    documents: Mutex<Vec<Document>>,
}

impl InMemoryChoreographyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a raw document and returns its id.
    pub fn seed(&self, mut document: Document) -> String {
        let oid = ObjectId::new();
        document.insert("_id", oid);
        self.documents.lock().unwrap().push(document);
        oid.to_hex()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.lock().unwrap().is_empty()
    }

    pub fn find(&self, id: &str) -> Option<Document> {
        let oid = ObjectId::parse_str(id).ok()?;
        self.documents
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.get_object_id("_id").ok() == Some(oid))
            .cloned()
    }
}

#[async_trait]
impl ChoreographyRepository for InMemoryChoreographyRepository {
    async fn create(&self, new_choreography: NewChoreography) -> Result<String, StoreError> {
        let document =
            bson::to_document(&new_choreography).map_err(|e| StoreError::Write(e.to_string()))?;
        Ok(self.seed(document))
    }

    async fn list_all(&self) -> Result<Vec<Document>, StoreError> {
        Ok(self.documents.lock().unwrap().clone())
    }

    async fn replace_markers(&self, id: &str, markers: Vec<Marker>) -> Result<bool, StoreError> {
        let oid =
            ObjectId::parse_str(id).map_err(|_| StoreError::InvalidIdentifier(id.to_string()))?;
        let markers = bson::to_bson(&markers).map_err(|e| StoreError::Write(e.to_string()))?;

        let mut documents = self.documents.lock().unwrap();
        match documents
            .iter_mut()
            .find(|d| d.get_object_id("_id").ok() == Some(oid))
        {
            Some(document) => {
                document.insert("markers", markers);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn connection_state(&self) -> ConnectionState {
        ConnectionState::Connected
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(vec!["choreography".to_string()])
    }
}

pub fn full_presence() -> StoreConfigPresence {
    StoreConfigPresence {
        database_url: true,
        database_name: true,
    }
}

/// Test server over an in-memory repository.
pub fn create_test_server() -> (TestServer, Arc<InMemoryChoreographyRepository>) {
    let repo = Arc::new(InMemoryChoreographyRepository::new());
    let state = AppState::new(repo.clone(), full_presence());
    let server = TestServer::new(build_router(state)).unwrap();
    (server, repo)
}

/// Test server whose store has no database configured.
pub fn create_disconnected_server() -> TestServer {
    let store = Arc::new(DocumentStore::disconnected());
    let repo = Arc::new(MongoChoreographyRepository::new(store));
    let state = AppState::new(repo, StoreConfigPresence::default());
    TestServer::new(build_router(state)).unwrap()
}

/// Test server whose store client could not be built.
pub fn create_failed_server(reason: &str) -> TestServer {
    let store = Arc::new(DocumentStore::failed(reason));
    let repo = Arc::new(MongoChoreographyRepository::new(store));
    let state = AppState::new(repo, full_presence());
    TestServer::new(build_router(state)).unwrap()
}

/// A stored choreography document the way the gateway writes it.
pub fn sample_document(title: &str) -> Document {
    doc! {
        "title": title,
        "audio_url": Bson::Null,
        "bpm": 100.0,
        "markers": [
            { "time": 0.0, "label": "Start", "count": 1_i64 },
        ],
    }
}
