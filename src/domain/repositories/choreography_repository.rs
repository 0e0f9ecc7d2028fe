//! Repository trait for choreography data access.

use crate::domain::entities::{Marker, NewChoreography};
use crate::error::StoreError;
use async_trait::async_trait;
use mongodb::bson::Document;

/// Whether the store has a usable database handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    /// A client was built for the configured database.
    Connected,
    /// `DATABASE_URL` or `DATABASE_NAME` was missing at startup.
    NotConfigured,
    /// Settings were present but the driver client could not be built.
    InitFailed(String),
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected)
    }
}

/// Repository interface for the choreography collection.
///
/// Every method is a single store operation; there is no cross-call state.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoChoreographyRepository`] - MongoDB implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChoreographyRepository: Send + Sync {
    /// Inserts a new choreography and returns its identifier as text.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] without a database connection and
    /// [`StoreError::Write`] on driver failures.
    async fn create(&self, new_choreography: NewChoreography) -> Result<String, StoreError>;

    /// Returns every stored choreography document as-is.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] or [`StoreError::Read`].
    async fn list_all(&self) -> Result<Vec<Document>, StoreError>;

    /// Replaces the whole `markers` array of the choreography with `id`.
    ///
    /// Returns `Ok(true)` if a document matched, whether or not its content
    /// actually changed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidIdentifier`] if `id` is not an ObjectId,
    /// [`StoreError::Unavailable`] or [`StoreError::Write`] otherwise.
    async fn replace_markers(&self, id: &str, markers: Vec<Marker>) -> Result<bool, StoreError>;

    /// Whether a database handle is available, and why not if it isn't.
    fn connection_state(&self) -> ConnectionState;

    /// Lists collection names in the database, for diagnostics.
    async fn collection_names(&self) -> Result<Vec<String>, StoreError>;
}
