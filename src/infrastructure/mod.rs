//! Infrastructure layer for external integrations.
//!
//! - [`persistence`] - MongoDB gateway and repository implementations

pub mod persistence;
