//! Liveness and readiness report.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health report for the submission service.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the database is reachable and migrated, else `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub database: DatabaseHealth,
    /// Render strategy aliases the running process resolves.
    pub renderers: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    pub reachable: bool,
    /// Version of the newest applied migration.
    pub migration: Option<i64>,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let reachable = formflow_db::health_check(&state.pool).await.is_ok();
    let migration = if reachable {
        formflow_db::latest_migration(&state.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Could not read migration state");
                None
            })
    } else {
        None
    };

    let status = if reachable && migration.is_some() {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        database: DatabaseHealth {
            reachable,
            migration,
        },
        renderers: state.processor.registry().aliases(),
    })
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
