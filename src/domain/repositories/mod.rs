//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`; a `mockall`
//! mock is generated for unit tests.

pub mod choreography_repository;

pub use choreography_repository::{ChoreographyRepository, ConnectionState};

#[cfg(test)]
pub use choreography_repository::MockChoreographyRepository;
