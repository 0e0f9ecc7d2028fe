//! Domain layer containing the choreography data model.
//!
//! # Architecture
//!
//! - [`entities`] - Choreography and marker values
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the HTTP or MongoDB layers.
//! Repository traits are implemented in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
