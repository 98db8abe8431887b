//! Route definitions for the `/submissions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::submissions;
use crate::state::AppState;

/// Routes mounted at `/submissions`.
///
/// ```text
/// GET    /{id}   -> get_submission
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", get(submissions::get_submission))
}
