//! Cross-origin resource sharing.

use tower_http::cors::{Any, CorsLayer};

/// Permissive CORS: any origin, method, and header.
///
/// Credentials are not allowed, since a wildcard origin cannot be combined
/// with them.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
