use crate::types::DbId;
use crate::validation::ConstraintViolation;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}

/// Infrastructure failure reported by a storage collaborator.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Why a submission attempt produced no submission.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// No form schema is attached to the attempt.
    #[error("Form schema is missing")]
    MissingSchema,

    /// One or more fields failed declarative validation.
    #[error("Validation failed with {} violation(s)", .0.len())]
    ValidationFailed(Vec<ConstraintViolation>),

    /// Schema lookup or commit failed; passed through unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}
