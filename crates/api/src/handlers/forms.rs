//! Handlers for the `/forms` resource.

use axum::extract::{Path, State};
use axum::Json;
use formflow_core::error::CoreError;
use formflow_core::schema::FormSchema;
use formflow_core::types::DbId;
use formflow_db::repositories::FormRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/forms/{id}
///
/// Return the form's schema with fields in position order.
pub async fn get_schema(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<FormSchema>>> {
    let schema = FormRepo::load_schema(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Form", id }))?;
    Ok(Json(DataResponse { data: schema }))
}
