//! Application layer services.
//!
//! - [`services::choreography_service::ChoreographyService`] - Choreography
//!   creation, listing, and marker replacement

pub mod services;
