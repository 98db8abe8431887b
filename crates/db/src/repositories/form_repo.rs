//! Repository for the `forms` and `form_fields` tables.

use formflow_core::schema::FormSchema;
use formflow_core::types::DbId;
use sqlx::PgPool;

use crate::models::form::{CreateForm, CreateFormField, Form, FormFieldRow};

/// Column list for the `forms` table.
const COLUMNS: &str = "id, consumer_id, code, created_at, updated_at";

/// Column list for `form_fields` queries (joined with `field_types`).
const FIELD_COLUMNS: &str = "ff.id, ff.form_id, ff.field_type_id, \
    ft.slug AS field_type_slug, ft.version AS field_type_version, \
    ff.name, ff.label, ff.position, ff.validation_rules, ff.ui_options, \
    ff.render_strategy, ff.render_options, ff.created_at, ff.updated_at";

/// Provides form schema creation and lookup.
pub struct FormRepo;

impl FormRepo {
    /// Insert a form and all of its fields in one transaction.
    pub async fn create(pool: &PgPool, input: &CreateForm) -> Result<Form, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO forms (consumer_id, code) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        let form = sqlx::query_as::<_, Form>(&insert_query)
            .bind(input.consumer_id)
            .bind(&input.code)
            .fetch_one(&mut *tx)
            .await?;

        for field in &input.fields {
            Self::insert_field(&mut tx, form.id, field).await?;
        }

        tx.commit().await?;
        Ok(form)
    }

    /// Find a form by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Form>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM forms WHERE id = $1");
        sqlx::query_as::<_, Form>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a form by its unique code.
    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Form>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM forms WHERE code = $1");
        sqlx::query_as::<_, Form>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// List a form's fields in position order (ties broken by insertion).
    pub async fn list_fields(
        pool: &PgPool,
        form_id: DbId,
    ) -> Result<Vec<FormFieldRow>, sqlx::Error> {
        sqlx::query_as::<_, FormFieldRow>(&Self::fields_query())
            .bind(form_id)
            .fetch_all(pool)
            .await
    }

    /// Load the engine-facing schema for a form.
    ///
    /// The form row and its fields are read from one repeatable-read
    /// snapshot, so a concurrent field edit cannot produce a mixed schema.
    /// Returns `None` if no form with the given `id` exists.
    pub async fn load_schema(pool: &PgPool, id: DbId) -> Result<Option<FormSchema>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let form_query = format!("SELECT {COLUMNS} FROM forms WHERE id = $1");
        let Some(form) = sqlx::query_as::<_, Form>(&form_query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            tx.commit().await?;
            return Ok(None);
        };

        let fields = sqlx::query_as::<_, FormFieldRow>(&Self::fields_query())
            .bind(form.id)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(form.into_schema(fields)))
    }

    fn fields_query() -> String {
        format!(
            "SELECT {FIELD_COLUMNS} \
             FROM form_fields ff \
             JOIN field_types ft ON ft.id = ff.field_type_id \
             WHERE ff.form_id = $1 \
             ORDER BY ff.position, ff.id"
        )
    }

    async fn insert_field(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        form_id: DbId,
        input: &CreateFormField,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO form_fields \
                (form_id, field_type_id, name, label, position, validation_rules, \
                 ui_options, render_strategy, render_options) \
             VALUES ($1, $2, $3, $4, COALESCE($5, 0), COALESCE($6, '{}'), \
                     COALESCE($7, '{}'), COALESCE($8, 'default'), COALESCE($9, '{}'))",
        )
        .bind(form_id)
        .bind(input.field_type_id)
        .bind(&input.name)
        .bind(&input.label)
        .bind(input.position)
        .bind(&input.validation_rules)
        .bind(&input.ui_options)
        .bind(&input.render_strategy)
        .bind(&input.render_options)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}
