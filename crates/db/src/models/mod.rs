//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts, where the table is writable here

pub mod consumer;
pub mod field_type;
pub mod form;
pub mod submission;
