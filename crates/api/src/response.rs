//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Serializing through
//! [`DataResponse`] rather than `serde_json::json!` keeps the field order of
//! submission snapshots intact.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
