//! Repository for the `field_types` catalog (read-only).

use sqlx::PgPool;

use crate::models::field_type::FieldType;

/// Column list for the `field_types` table.
const COLUMNS: &str = "id, slug, version, label, icon, description, data_type, component, \
    default_configuration, presentation_type, created_at, updated_at";

/// Read access to the field type catalog.
pub struct FieldTypeRepo;

impl FieldTypeRepo {
    /// List all field types, ordered by slug.
    pub async fn list(pool: &PgPool) -> Result<Vec<FieldType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM field_types ORDER BY slug");
        sqlx::query_as::<_, FieldType>(&query).fetch_all(pool).await
    }

    /// Find a field type by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<FieldType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM field_types WHERE slug = $1");
        sqlx::query_as::<_, FieldType>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }
}
