//! The submission processor.
//!
//! One attempt walks the schema's fields in position order. For each field
//! it validates the raw value, renders it, and records a snapshot entry.
//! Rendering happens whether or not the field is valid, and no field stops
//! the walk early, so callers get every violation in one round trip.
//!
//! Only after the walk does the attempt decide: any violation rejects it
//! and the snapshot is dropped; otherwise the snapshot is timestamped and
//! committed through the [`SubmissionStore`] as a single unit.

use std::sync::Arc;

use chrono::Utc;

use super::store::{SchemaSource, SubmissionStore};
use super::{Evaluation, NewSubmission, Submission};
use crate::error::SubmissionError;
use crate::render::RendererRegistry;
use crate::schema::{value_of, FormSchema, RawPayload};
use crate::snapshot::{Snapshot, SnapshotEntry};
use crate::types::DbId;
use crate::validation::{map_rules, validate_value};

/// Orchestrates validation, rendering, and commit for submission attempts.
///
/// Holds no per-attempt state; concurrent attempts may share one processor.
pub struct SubmissionProcessor<S> {
    registry: Arc<RendererRegistry>,
    store: S,
}

impl<S> SubmissionProcessor<S> {
    pub fn new(registry: Arc<RendererRegistry>, store: S) -> Self {
        Self { registry, store }
    }

    pub fn registry(&self) -> &RendererRegistry {
        &self.registry
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate and render every field without touching storage.
    pub fn evaluate(&self, schema: &FormSchema, payload: &RawPayload) -> Evaluation {
        let mut violations = Vec::new();
        let mut snapshot = Snapshot::with_capacity(schema.fields().len());

        for field in schema.fields() {
            let value = value_of(payload, &field.name);

            let constraints = map_rules(&field.validation_rules);
            violations.extend(validate_value(&field.name, &value, &constraints));

            let rendered = self
                .registry
                .resolve(&field.render_strategy)
                .render(&value, &field.render_options);

            snapshot.insert(
                field.name.clone(),
                SnapshotEntry::capture(value, rendered, &field.field_type),
            );
        }

        Evaluation {
            violations,
            snapshot,
        }
    }
}

impl<S: SubmissionStore> SubmissionProcessor<S> {
    /// Process one submission attempt.
    ///
    /// Fails with [`SubmissionError::MissingSchema`] before doing any work if
    /// `schema` is `None`, and with [`SubmissionError::ValidationFailed`]
    /// (without calling the store) if any field is invalid.
    pub async fn process(
        &self,
        schema: Option<&FormSchema>,
        payload: &RawPayload,
    ) -> Result<Submission, SubmissionError> {
        let Some(schema) = schema else {
            tracing::warn!("Submission attempt without a form schema");
            return Err(SubmissionError::MissingSchema);
        };

        let Evaluation {
            violations,
            snapshot,
        } = self.evaluate(schema, payload);
        tracing::debug!(
            form_id = schema.id,
            fields = schema.fields().len(),
            violations = violations.len(),
            "Evaluated submission"
        );

        if !violations.is_empty() {
            tracing::warn!(
                form_id = schema.id,
                violations = violations.len(),
                "Submission rejected"
            );
            return Err(SubmissionError::ValidationFailed(violations));
        }

        let submission = self
            .store
            .commit(NewSubmission {
                form_id: schema.id,
                data: snapshot,
                created_at: Utc::now(),
            })
            .await?;
        tracing::info!(
            submission_id = submission.id,
            form_id = submission.form_id,
            "Submission committed"
        );
        Ok(submission)
    }

    /// Look up the form's schema and process the payload against it.
    ///
    /// An unknown form surfaces as [`SubmissionError::MissingSchema`].
    pub async fn submit(
        &self,
        schemas: &impl SchemaSource,
        form_id: DbId,
        payload: &RawPayload,
    ) -> Result<Submission, SubmissionError> {
        let schema = schemas.find_schema(form_id).await?;
        self.process(schema.as_ref(), payload).await
    }
}
