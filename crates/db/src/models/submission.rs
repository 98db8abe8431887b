//! Submission row model.

use formflow_core::snapshot::Snapshot;
use formflow_core::submission::Submission;
use formflow_core::types::{DbId, Timestamp};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `submissions` table.
#[derive(Debug, Clone, FromRow)]
pub struct SubmissionRow {
    pub id: DbId,
    pub form_id: DbId,
    pub data: Json<Snapshot>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<SubmissionRow> for Submission {
    fn from(row: SubmissionRow) -> Self {
        Submission {
            id: row.id,
            form_id: row.form_id,
            data: row.data.0,
            created_at: row.created_at,
        }
    }
}
