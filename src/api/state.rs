//! API server state

use std::sync::Arc;

use crate::registry::ActivityRegistry;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Activity registry owned by the server process
    pub registry: Arc<ActivityRegistry>,
}

impl AppState {
    pub fn new(registry: Arc<ActivityRegistry>) -> Self {
        Self { registry }
    }

    /// State backed by a freshly seeded registry
    pub fn seeded() -> Self {
        Self::new(Arc::new(ActivityRegistry::seeded()))
    }
}
