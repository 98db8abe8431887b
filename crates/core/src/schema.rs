//! Form schema model: the ordered field specifications a submission is
//! validated and rendered against.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::DbId;

/// Render strategy alias used when a field does not name one.
pub const DEFAULT_RENDER_STRATEGY: &str = "default";

/// Untyped field-name to value mapping decoded from a request body.
pub type RawPayload = Map<String, Value>;

/// Catalog identity of a field type, captured by value into snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldTypeRef {
    pub name: String,
    pub version: i32,
}

/// One field's configuration within a form schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Payload key and error-pointer path. Unique within a schema.
    pub name: String,
    pub label: String,
    pub position: i32,
    /// Declarative rule map, e.g. `{"required": true, "min": 5}`.
    #[serde(default)]
    pub validation_rules: Map<String, Value>,
    #[serde(default = "default_render_strategy")]
    pub render_strategy: String,
    #[serde(default)]
    pub render_options: Map<String, Value>,
    /// Provenance only; never consulted for validation.
    pub field_type: FieldTypeRef,
}

fn default_render_strategy() -> String {
    DEFAULT_RENDER_STRATEGY.to_string()
}

/// An ordered set of field specifications defining one form.
///
/// Fields are kept sorted by `position`. Equal positions keep the order in
/// which they were supplied.
#[derive(Debug, Clone, Serialize)]
pub struct FormSchema {
    pub id: DbId,
    pub consumer_id: DbId,
    pub code: String,
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new(
        id: DbId,
        consumer_id: DbId,
        code: impl Into<String>,
        mut fields: Vec<FieldSpec>,
    ) -> Self {
        fields.sort_by_key(|f| f.position);
        Self {
            id,
            consumer_id,
            code: code.into(),
            fields,
        }
    }

    /// Fields in position order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }
}

/// Look up a field's raw value. Absent keys resolve to `null`.
pub fn value_of(payload: &RawPayload, name: &str) -> Value {
    payload.get(name).cloned().unwrap_or(Value::Null)
}
