//! HTTP middleware layers.
//!
//! Provides request tracing and cross-origin access.

pub mod cors;
pub mod tracing;
