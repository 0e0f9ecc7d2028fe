//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs derive `serde::Deserialize` and `validator::Validate`; they are
//! accepted through [`crate::api::extract::ValidatedJson`].

pub mod choreography;
pub mod diagnostics;
