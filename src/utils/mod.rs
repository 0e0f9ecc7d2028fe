//! Utility functions shared across layers.
//!
//! - [`bson_json`] - Rendering stored BSON documents as API JSON

pub mod bson_json;
