use std::sync::Arc;

use formflow_core::submission::SubmissionProcessor;
use formflow_db::PgStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: formflow_db::DbPool,
    /// Submission engine; owns the renderer registry built at startup.
    pub processor: Arc<SubmissionProcessor<PgStore>>,
}

impl AppState {
    /// Wire the processor to a Postgres-backed store and the given registry.
    pub fn new(
        pool: formflow_db::DbPool,
        registry: Arc<formflow_core::render::RendererRegistry>,
    ) -> Self {
        let processor = SubmissionProcessor::new(registry, PgStore::new(pool.clone()));
        Self {
            pool,
            processor: Arc::new(processor),
        }
    }
}
