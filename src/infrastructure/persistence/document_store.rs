//! MongoDB document store gateway.

use std::time::Duration;

use futures_util::TryStreamExt;
use mongodb::bson::{self, Bson, DateTime, Document, doc, oid::ObjectId};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use serde::Serialize;

use crate::domain::repositories::ConnectionState;
use crate::error::StoreError;

/// Driver settings applied when connecting.
#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub max_pool_size: u32,
    pub connect_timeout: Duration,
    pub server_selection_timeout: Duration,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            max_pool_size: 10,
            connect_timeout: Duration::from_secs(10),
            server_selection_timeout: Duration::from_secs(10),
        }
    }
}

/// Owns the database handle and exposes collection-level operations.
///
/// A store built with [`DocumentStore::disconnected`] or
/// [`DocumentStore::failed`] has no handle; every operation then fails with
/// [`StoreError::Unavailable`]. The driver client
/// pools connections internally, so one instance is shared process-wide.
#[derive(Clone)]
pub struct DocumentStore {
    database: Option<Database>,
    init_error: Option<String>,
}

impl DocumentStore {
    /// Builds a client for `uri` and selects `database_name`.
    ///
    /// The driver connects lazily; use [`DocumentStore::ping`] to verify
    /// the server is reachable.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection string cannot be parsed.
    pub async fn connect(
        uri: &str,
        database_name: &str,
        options: &StoreOptions,
    ) -> mongodb::error::Result<Self> {
        let mut client_options = ClientOptions::parse(uri).await?;
        client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        client_options.max_pool_size = Some(options.max_pool_size);
        client_options.connect_timeout = Some(options.connect_timeout);
        client_options.server_selection_timeout = Some(options.server_selection_timeout);

        let client = Client::with_options(client_options)?;

        Ok(Self {
            database: Some(client.database(database_name)),
            init_error: None,
        })
    }

    /// A store without a database handle, for missing settings.
    pub fn disconnected() -> Self {
        Self {
            database: None,
            init_error: None,
        }
    }

    /// A store whose client could not be built; `reason` is kept for diagnostics.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            database: None,
            init_error: Some(reason.into()),
        }
    }

    pub fn connection_state(&self) -> ConnectionState {
        match (&self.database, &self.init_error) {
            (Some(_), _) => ConnectionState::Connected,
            (None, Some(reason)) => ConnectionState::InitFailed(reason.clone()),
            (None, None) => ConnectionState::NotConfigured,
        }
    }

    pub fn database_name(&self) -> Option<&str> {
        self.database.as_ref().map(|db| db.name())
    }

    fn database(&self) -> Result<&Database, StoreError> {
        self.database.as_ref().ok_or(StoreError::Unavailable)
    }

    /// Sends a `ping` command to the server.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.database()?
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::Read(e.to_string()))?;
        Ok(())
    }

    /// Inserts `value` into `collection` and returns the assigned id as hex text.
    ///
    /// `created_at` and `updated_at` are stamped on the stored document.
    pub async fn insert<T: Serialize>(
        &self,
        collection: &str,
        value: &T,
    ) -> Result<String, StoreError> {
        let database = self.database()?;

        let mut document =
            bson::to_document(value).map_err(|e| StoreError::Write(e.to_string()))?;
        let now = DateTime::now();
        document.insert("created_at", now);
        document.insert("updated_at", now);

        let result = database
            .collection::<Document>(collection)
            .insert_one(document)
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;

        Ok(match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        })
    }

    /// Returns every document in `collection` in natural order.
    pub async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let database = self.database()?;

        let cursor = database
            .collection::<Document>(collection)
            .find(doc! {})
            .await
            .map_err(|e| StoreError::Read(e.to_string()))?;

        cursor
            .try_collect::<Vec<Document>>()
            .await
            .map_err(|e| StoreError::Read(e.to_string()))
    }

    /// Atomically sets one top-level `field` on the document with `id`.
    ///
    /// `updated_at` is refreshed in the same update. Returns whether a
    /// document matched.
    pub async fn set_field(
        &self,
        collection: &str,
        id: &str,
        field: &str,
        value: Bson,
    ) -> Result<bool, StoreError> {
        let oid = parse_object_id(id)?;
        let database = self.database()?;

        let mut fields = Document::new();
        fields.insert(field, value);
        fields.insert("updated_at", DateTime::now());

        let result = database
            .collection::<Document>(collection)
            .update_one(doc! { "_id": oid }, doc! { "$set": fields })
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;

        Ok(result.matched_count > 0)
    }

    /// Lists the collections of the selected database.
    pub async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        self.database()?
            .list_collection_names()
            .await
            .map_err(|e| StoreError::Read(e.to_string()))
    }
}

/// Parses a 24-character hex ObjectId.
pub fn parse_object_id(id: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidIdentifier(id.to_string()))
}
