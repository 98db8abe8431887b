//! Field type catalog model.

use formflow_core::schema::FieldTypeRef;
use formflow_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `field_types` table. Read-only from this service.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FieldType {
    pub id: DbId,
    pub slug: String,
    pub version: i32,
    pub label: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub data_type: String,
    pub component: String,
    pub default_configuration: serde_json::Value,
    pub presentation_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl FieldType {
    /// Identity captured into submission snapshots.
    pub fn type_ref(&self) -> FieldTypeRef {
        FieldTypeRef {
            name: self.slug.clone(),
            version: self.version,
        }
    }
}
