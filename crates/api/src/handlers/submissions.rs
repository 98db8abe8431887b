//! Handlers for submission intake and read-back.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use formflow_core::error::{CoreError, SubmissionError};
use formflow_core::schema::RawPayload;
use formflow_core::submission::{SchemaSource, Submission};
use formflow_core::types::DbId;
use formflow_db::repositories::{FormRepo, SubmissionRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::ApiConsumer;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/forms/{id}/submissions
///
/// Requires an `X-API-KEY` belonging to the form's consumer. Validates the
/// raw payload against the form's schema, renders and snapshots every field,
/// and commits. Returns the submission with HTTP 201, or 422 with every
/// violation when any field is invalid.
pub async fn create_submission(
    State(state): State<AppState>,
    consumer: ApiConsumer,
    Path(form_id): Path<DbId>,
    payload: Result<Json<RawPayload>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<Submission>>)> {
    let Json(payload) = payload?;

    let schema = state
        .processor
        .store()
        .find_schema(form_id)
        .await
        .map_err(SubmissionError::from)?;

    if let Some(schema) = &schema {
        if schema.consumer_id != consumer.consumer_id {
            tracing::warn!(
                consumer_id = consumer.consumer_id,
                form_id,
                "Submission to a form owned by another consumer"
            );
            return Err(AppError::Core(CoreError::Forbidden(
                "Form belongs to another consumer".into(),
            )));
        }
    }

    let submission = state.processor.process(schema.as_ref(), &payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: submission }),
    ))
}

/// GET /api/v1/forms/{id}/submissions
///
/// List a form's submissions, newest first. Returns 404 if the form does
/// not exist.
pub async fn list_submissions(
    State(state): State<AppState>,
    Path(form_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Submission>>>> {
    FormRepo::find_by_id(&state.pool, form_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Form",
            id: form_id,
        }))?;
    let submissions = SubmissionRepo::list_by_form(&state.pool, form_id).await?;
    Ok(Json(DataResponse { data: submissions }))
}

/// GET /api/v1/submissions/{id}
pub async fn get_submission(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Submission>>> {
    let submission = SubmissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Submission",
            id,
        }))?;
    Ok(Json(DataResponse { data: submission }))
}
