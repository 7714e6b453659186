use crate::dashboard::Dashboard;
use std::sync::Arc;

/// Shared by every handler; the dashboard is never mutated after startup
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Dashboard>,
}

impl AppState {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard: Arc::new(dashboard),
        }
    }
}
