use std::sync::Arc;

use crate::config::Config;
use crate::models::job::JobCatalog;
use crate::store::JobStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<JobCatalog>,
    /// Saved jobs and alert subscriptions. Backend chosen at startup.
    pub store: JobStore,
    pub config: Config,
}
