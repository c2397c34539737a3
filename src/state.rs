//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ResolutionService, ShorteningService};

#[derive(Clone)]
pub struct AppState {
    pub shortening_service: Arc<ShorteningService>,
    pub resolution_service: Arc<ResolutionService>,
}

impl AppState {
    pub fn new(
        shortening_service: Arc<ShorteningService>,
        resolution_service: Arc<ResolutionService>,
    ) -> Self {
        Self {
            shortening_service,
            resolution_service,
        }
    }
}
