//! # Choreography API
//!
//! A small HTTP service for choreography timelines, built with Axum and MongoDB.
//! Clients list choreographies, create new ones, and replace the markers array
//! of an existing choreography.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Choreography and marker values, repository traits
//! - **Application Layer** ([`application`]) - Service mapping store outcomes to API errors
//! - **Infrastructure Layer** ([`infrastructure`]) - MongoDB document store gateway
//! - **API Layer** ([`api`]) - Handlers, DTOs with validation rules, extractors, middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="mongodb://localhost:27017"
//! export DATABASE_NAME="choreography"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{AppError, StoreError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ChoreographyService;
    pub use crate::domain::entities::{Marker, NewChoreography};
    pub use crate::domain::repositories::{ChoreographyRepository, ConnectionState};
    pub use crate::error::{AppError, StoreError};
    pub use crate::routes::{app_router, build_router};
    pub use crate::state::{AppState, StoreConfigPresence};
}
