//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod choreographies;
pub mod diagnostics;

pub use choreographies::{
    create_choreography_handler, list_choreographies_handler, replace_markers_handler,
};
pub use diagnostics::{diagnostics_handler, liveness_handler};
