//! Submission processing engine for runtime-defined forms.
//!
//! Everything here is pure logic over in-memory data: rule mapping,
//! constraint evaluation, value rendering, and snapshot assembly. The only
//! I/O happens behind the collaborator traits in [`submission::store`].

pub mod error;
mod numeric;
pub mod render;
pub mod schema;
pub mod snapshot;
pub mod submission;
pub mod types;
pub mod validation;
