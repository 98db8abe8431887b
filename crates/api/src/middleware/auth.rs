//! API-key authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::ORIGIN;
use axum::http::request::Parts;
use formflow_core::error::CoreError;
use formflow_core::types::DbId;
use formflow_db::repositories::ConsumerRepo;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying a consumer's API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Consumer authenticated by the `X-API-KEY` header.
///
/// ```ignore
/// async fn my_handler(consumer: ApiConsumer) -> AppResult<Json<()>> {
///     tracing::info!(consumer_id = consumer.consumer_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConsumer {
    pub consumer_id: DbId,
    pub name: String,
}

impl FromRequestParts<AppState> for ApiConsumer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let api_key = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Missing X-API-KEY header".into()))
            })?;

        let consumer = ConsumerRepo::find_by_api_key(&state.pool, api_key)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Rejected request with unknown API key");
                AppError::Core(CoreError::Unauthorized("Invalid API key".into()))
            })?;

        let origin = parts.headers.get(ORIGIN).and_then(|v| v.to_str().ok());
        if !consumer.allows_origin(origin) {
            tracing::warn!(consumer_id = consumer.id, ?origin, "Origin not allowed for consumer");
            return Err(AppError::Core(CoreError::Forbidden(
                "Origin is not allowed for this API key".into(),
            )));
        }

        Ok(ApiConsumer {
            consumer_id: consumer.id,
            name: consumer.name,
        })
    }
}
