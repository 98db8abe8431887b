//! Point-in-time record of raw and rendered values for a submission.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::FieldTypeRef;

/// Snapshot entries keyed by field name, in schema position order.
pub type Snapshot = IndexMap<String, SnapshotEntry>;

/// One field's captured values plus the field type identity at capture time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub raw_value: Value,
    pub rendered_value: Value,
    pub field_type_name: String,
    pub field_type_version: i32,
}

impl SnapshotEntry {
    /// Capture an entry. The field type is copied by value so later catalog
    /// edits do not change how historical submissions read.
    pub fn capture(raw_value: Value, rendered_value: Value, field_type: &FieldTypeRef) -> Self {
        Self {
            raw_value,
            rendered_value,
            field_type_name: field_type.name.clone(),
            field_type_version: field_type.version,
        }
    }
}
