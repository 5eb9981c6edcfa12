use std::sync::Arc;

use crate::config::Config;
use crate::matching::engine::MatchEngine;
use crate::matching::store::MatchStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<MatchEngine>,
    /// None when DATABASE_URL is unset; results are then returned but not stored.
    pub store: Option<Arc<dyn MatchStore>>,
    pub config: Config,
}
