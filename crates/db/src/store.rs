//! Postgres implementation of the submission processor's collaborators.

use async_trait::async_trait;
use formflow_core::error::StoreError;
use formflow_core::schema::FormSchema;
use formflow_core::submission::{NewSubmission, SchemaSource, Submission, SubmissionStore};
use formflow_core::types::DbId;

use crate::repositories::{FormRepo, SubmissionRepo};
use crate::DbPool;

/// Schema lookup and transactional commit backed by a connection pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

fn backend(err: sqlx::Error) -> StoreError {
    tracing::error!(error = %err, "Storage operation failed");
    StoreError::Backend(Box::new(err))
}

#[async_trait]
impl SchemaSource for PgStore {
    async fn find_schema(&self, form_id: DbId) -> Result<Option<FormSchema>, StoreError> {
        FormRepo::load_schema(&self.pool, form_id)
            .await
            .map_err(backend)
    }
}

#[async_trait]
impl SubmissionStore for PgStore {
    async fn commit(&self, submission: NewSubmission) -> Result<Submission, StoreError> {
        SubmissionRepo::create(&self.pool, &submission)
            .await
            .map_err(backend)
    }
}
