use crate::services::RecommendationEngine;

/// Shared application state
///
/// The engine's dataset is read-only after startup, so handlers share it
/// without locking.
#[derive(Clone, Default)]
pub struct AppState {
    pub engine: RecommendationEngine,
}

impl AppState {
    pub fn new(engine: RecommendationEngine) -> Self {
        Self { engine }
    }
}
