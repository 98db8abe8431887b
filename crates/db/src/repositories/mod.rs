//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod consumer_repo;
pub mod field_type_repo;
pub mod form_repo;
pub mod submission_repo;

pub use consumer_repo::ConsumerRepo;
pub use field_type_repo::FieldTypeRepo;
pub use form_repo::FormRepo;
pub use submission_repo::SubmissionRepo;
