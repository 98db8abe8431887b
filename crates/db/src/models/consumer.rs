//! Consumer entity model and DTOs.

use formflow_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `consumers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Consumer {
    pub id: DbId,
    pub name: String,
    #[serde(skip_serializing)]
    pub api_key: String,
    pub contact_email: String,
    /// Browser origins allowed to submit with this key. Empty allows any.
    pub allowed_origins: Json<Vec<String>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Consumer {
    /// Whether a request from `origin` may act as this consumer.
    ///
    /// Requests without an `Origin` header (server-to-server) are always
    /// allowed.
    pub fn allows_origin(&self, origin: Option<&str>) -> bool {
        match origin {
            None => true,
            Some(_) if self.allowed_origins.is_empty() => true,
            Some(origin) => self.allowed_origins.iter().any(|o| o == origin),
        }
    }
}

/// DTO for creating a consumer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateConsumer {
    pub name: String,
    pub api_key: String,
    pub contact_email: String,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}
