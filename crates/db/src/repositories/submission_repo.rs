//! Repository for the `submissions` table.

use formflow_core::submission::{NewSubmission, Submission};
use formflow_core::types::DbId;
use sqlx::PgPool;

use crate::models::submission::SubmissionRow;

/// Column list for the `submissions` table.
const COLUMNS: &str = "id, form_id, data, created_at, updated_at";

/// Provides commit and read-back for accepted submissions.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Persist a validated submission with its full snapshot in one transaction.
    ///
    /// The snapshot is sent as JSON text and cast to `json` so its key order
    /// survives storage.
    pub async fn create(pool: &PgPool, input: &NewSubmission) -> Result<Submission, sqlx::Error> {
        let data =
            serde_json::to_string(&input.data).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO submissions (form_id, data, created_at) \
             VALUES ($1, $2::json, $3) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, SubmissionRow>(&query)
            .bind(input.form_id)
            .bind(data)
            .bind(input.created_at)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row.into())
    }

    /// Find a submission by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM submissions WHERE id = $1");
        let row = sqlx::query_as::<_, SubmissionRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Submission::from))
    }

    /// List a form's submissions, newest first.
    pub async fn list_by_form(
        pool: &PgPool,
        form_id: DbId,
    ) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM submissions \
             WHERE form_id = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, SubmissionRow>(&query)
            .bind(form_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Submission::from).collect())
    }

    /// Count a form's submissions.
    pub async fn count_by_form(pool: &PgPool, form_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM submissions WHERE form_id = $1")
            .bind(form_id)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
