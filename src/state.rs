//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ChoreographyService;
use crate::domain::repositories::ChoreographyRepository;

/// Which store settings were present at startup.
///
/// Only presence is kept; values never reach handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreConfigPresence {
    pub database_url: bool,
    pub database_name: bool,
}

#[derive(Clone)]
pub struct AppState {
    pub choreography_service: Arc<ChoreographyService>,
    pub store_config: StoreConfigPresence,
}

impl AppState {
    /// Builds the state around a repository instance.
    pub fn new(
        repository: Arc<dyn ChoreographyRepository>,
        store_config: StoreConfigPresence,
    ) -> Self {
        Self {
            choreography_service: Arc::new(ChoreographyService::new(repository)),
            store_config,
        }
    }
}
