//! Read-only views of the field type catalog and render strategies.

use axum::extract::State;
use axum::Json;
use formflow_db::models::field_type::FieldType;
use formflow_db::repositories::FieldTypeRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/field-types
pub async fn list_field_types(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<FieldType>>>> {
    let types = FieldTypeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: types }))
}

/// GET /api/v1/renderers
///
/// Aliases a field's `render_strategy` may name. Any other alias renders
/// values unchanged.
pub async fn list_renderers(State(state): State<AppState>) -> Json<DataResponse<Vec<&'static str>>> {
    Json(DataResponse {
        data: state.processor.registry().aliases(),
    })
}
