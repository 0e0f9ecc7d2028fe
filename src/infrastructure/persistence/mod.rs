//! MongoDB persistence.
//!
//! - [`DocumentStore`] - Gateway owning the database handle; collection-level
//!   insert, read, and single-field update operations
//! - [`MongoChoreographyRepository`] - Choreography repository over the gateway

pub mod document_store;
pub mod mongo_choreography_repository;

pub use document_store::{DocumentStore, StoreOptions};
pub use mongo_choreography_repository::MongoChoreographyRepository;
