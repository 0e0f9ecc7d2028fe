//! Business logic services for the application layer.

pub mod choreography_service;

pub use choreography_service::{ChoreographyService, StoreStatus};
