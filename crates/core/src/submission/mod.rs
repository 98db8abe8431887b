//! Submission intake: validate, render, snapshot, then commit or reject.

pub mod processor;
pub mod store;

use serde::{Deserialize, Serialize};

use crate::snapshot::Snapshot;
use crate::types::{DbId, Timestamp};
use crate::validation::ConstraintViolation;

pub use processor::SubmissionProcessor;
pub use store::{SchemaSource, SubmissionStore};

/// A fully validated submission, ready to be committed as one unit.
#[derive(Debug, Clone, Serialize)]
pub struct NewSubmission {
    pub form_id: DbId,
    pub data: Snapshot,
    pub created_at: Timestamp,
}

/// A committed submission as returned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: DbId,
    pub form_id: DbId,
    pub data: Snapshot,
    pub created_at: Timestamp,
}

/// Outputs of the per-field loop, combined into a decision only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Every violation from every field, in schema order.
    pub violations: Vec<ConstraintViolation>,
    /// Entries for every field, valid or not, in schema order.
    pub snapshot: Snapshot,
}

impl Evaluation {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}
