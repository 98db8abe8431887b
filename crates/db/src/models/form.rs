//! Form and form field models.

use formflow_core::schema::{FieldSpec, FieldTypeRef, FormSchema};
use formflow_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;

/// A row from the `forms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Form {
    pub id: DbId,
    pub consumer_id: DbId,
    pub code: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a form together with its fields.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateForm {
    pub consumer_id: DbId,
    pub code: String,
    #[serde(default)]
    pub fields: Vec<CreateFormField>,
}

/// A row from the `form_fields` table, joined with its field type identity.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FormFieldRow {
    pub id: DbId,
    pub form_id: DbId,
    pub field_type_id: DbId,
    /// Populated from `field_types.slug` via JOIN.
    pub field_type_slug: String,
    /// Populated from `field_types.version` via JOIN.
    pub field_type_version: i32,
    pub name: String,
    pub label: String,
    pub position: i32,
    pub validation_rules: Value,
    pub ui_options: Value,
    pub render_strategy: String,
    pub render_options: Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a form field.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFormField {
    pub field_type_id: DbId,
    pub name: String,
    pub label: String,
    pub position: Option<i32>,
    pub validation_rules: Option<Value>,
    pub ui_options: Option<Value>,
    pub render_strategy: Option<String>,
    pub render_options: Option<Value>,
}

impl From<FormFieldRow> for FieldSpec {
    fn from(row: FormFieldRow) -> Self {
        FieldSpec {
            name: row.name,
            label: row.label,
            position: row.position,
            validation_rules: into_map(row.validation_rules),
            render_strategy: row.render_strategy,
            render_options: into_map(row.render_options),
            field_type: FieldTypeRef {
                name: row.field_type_slug,
                version: row.field_type_version,
            },
        }
    }
}

impl Form {
    /// Assemble the engine-facing schema from this form and its field rows.
    pub fn into_schema(self, fields: Vec<FormFieldRow>) -> FormSchema {
        FormSchema::new(
            self.id,
            self.consumer_id,
            self.code,
            fields.into_iter().map(FieldSpec::from).collect(),
        )
    }
}

/// Rule and option columns are objects by convention; anything else is
/// treated as empty.
fn into_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
