pub mod forms;
pub mod health;
pub mod submissions;

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /field-types                  list field type catalog (GET)
/// /renderers                    list render strategy aliases (GET)
///
/// /forms/{id}                   get form schema (GET)
/// /forms/{id}/submissions       list, create submissions (GET, POST)
///
/// /submissions/{id}             get submission (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Read-only catalog views.
        .route("/field-types", get(catalog::list_field_types))
        .route("/renderers", get(catalog::list_renderers))
        // Form schemas and submission intake.
        .nest("/forms", forms::router())
        // Submission read-back.
        .nest("/submissions", submissions::router())
}
