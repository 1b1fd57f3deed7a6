use std::sync::Arc;

use lw_catalog::WorkStore;
use lw_domain::config::Config;

/// Shared application state passed to all API handlers.
///
/// Built once at startup; clones share the same store.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// The single in-memory store of literary works.
    pub works: Arc<WorkStore>,
}

impl AppState {
    /// State with an empty store.
    pub fn new(config: Arc<Config>) -> Self {
        Self::with_store(config, WorkStore::new())
    }

    pub fn with_store(config: Arc<Config>, works: WorkStore) -> Self {
        Self {
            config,
            works: Arc::new(works),
        }
    }
}
