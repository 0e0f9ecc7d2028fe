//! Core domain entities.
//!
//! - [`Marker`] - A labeled point on an audio timeline
//! - [`NewChoreography`] - Input for creating a choreography document
//!
//! Stored choreographies are read back as raw documents, so there is no
//! separate read model here.

pub mod choreography;

pub use choreography::{CHOREOGRAPHY_COLLECTION, Marker, NewChoreography};
