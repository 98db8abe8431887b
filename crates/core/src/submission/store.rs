//! Collaborator contracts consumed by the submission processor.

use async_trait::async_trait;

use super::{NewSubmission, Submission};
use crate::error::StoreError;
use crate::schema::FormSchema;
use crate::types::DbId;

/// Read access to form schemas.
#[async_trait]
pub trait SchemaSource: Send + Sync {
    /// Fetch a schema with its fields. `Ok(None)` when no such form exists.
    async fn find_schema(&self, form_id: DbId) -> Result<Option<FormSchema>, StoreError>;
}

/// Transactional persistence for accepted submissions.
///
/// `commit` must be atomic: either the submission and its full snapshot are
/// stored, or nothing is.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn commit(&self, submission: NewSubmission) -> Result<Submission, StoreError>;
}
