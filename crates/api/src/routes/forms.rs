//! Route definitions for the `/forms` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{forms, submissions};
use crate::state::AppState;

/// Routes mounted at `/forms`.
///
/// ```text
/// GET    /{id}               -> get_schema
/// GET    /{id}/submissions   -> list_submissions
/// POST   /{id}/submissions   -> create_submission
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", get(forms::get_schema)).route(
        "/{id}/submissions",
        get(submissions::list_submissions).post(submissions::create_submission),
    )
}
