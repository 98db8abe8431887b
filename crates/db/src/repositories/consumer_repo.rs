//! Repository for the `consumers` table.

use formflow_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::consumer::{Consumer, CreateConsumer};

/// Column list for the `consumers` table.
const COLUMNS: &str =
    "id, name, api_key, contact_email, allowed_origins, created_at, updated_at";

/// Provides create and lookup operations for form owners.
pub struct ConsumerRepo;

impl ConsumerRepo {
    /// Insert a new consumer, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateConsumer) -> Result<Consumer, sqlx::Error> {
        let query = format!(
            "INSERT INTO consumers (name, api_key, contact_email, allowed_origins) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Consumer>(&query)
            .bind(&input.name)
            .bind(&input.api_key)
            .bind(&input.contact_email)
            .bind(Json(&input.allowed_origins))
            .fetch_one(pool)
            .await
    }

    /// Find a consumer by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Consumer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM consumers WHERE id = $1");
        sqlx::query_as::<_, Consumer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the consumer owning an API key. Matching is exact.
    pub async fn find_by_api_key(
        pool: &PgPool,
        api_key: &str,
    ) -> Result<Option<Consumer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM consumers WHERE api_key = $1");
        sqlx::query_as::<_, Consumer>(&query)
            .bind(api_key)
            .fetch_optional(pool)
            .await
    }
}
