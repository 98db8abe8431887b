#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use formflow_api::config::ServerConfig;
use formflow_api::router::build_app_router;
use formflow_api::state::AppState;
use formflow_core::render::RendererRegistry;
use formflow_db::models::consumer::CreateConsumer;
use formflow_db::models::form::{CreateForm, CreateFormField};
use formflow_db::repositories::{ConsumerRepo, FieldTypeRepo, FormRepo};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and the builtin renderer registry.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState::new(pool, Arc::new(RendererRegistry::builtin()));
    build_app_router(state, &test_config())
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// API key of the consumer created by [`seed_invoice_form`].
pub const INVOICE_API_KEY: &str = "globex-key";

/// POST a JSON body, optionally authenticated with an `X-API-KEY`.
pub async fn post_json(
    app: Router,
    uri: &str,
    api_key: Option<&str>,
    body: Value,
) -> Response<Body> {
    post_raw(app, uri, api_key, body.to_string()).await
}

/// POST a body that need not be valid JSON.
pub async fn post_raw(
    app: Router,
    uri: &str,
    api_key: Option<&str>,
    body: String,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(key) = api_key {
        builder = builder.header("x-api-key", key);
    }
    app.oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

/// Collect the response body as text. Keeps the wire order of object keys.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn field_type_id(pool: &PgPool, slug: &str) -> i64 {
    FieldTypeRepo::find_by_slug(pool, slug)
        .await
        .unwrap()
        .unwrap_or_else(|| panic!("field type {slug} should be seeded"))
        .id
}

fn field(
    field_type_id: i64,
    name: &str,
    position: i32,
    rules: Value,
    render_strategy: Option<&str>,
) -> CreateFormField {
    CreateFormField {
        field_type_id,
        name: name.to_string(),
        label: name.to_string(),
        position: Some(position),
        validation_rules: Some(rules),
        ui_options: None,
        render_strategy: render_strategy.map(str::to_string),
        render_options: None,
    }
}

/// Create a consumer with the given API key and no origin restriction.
pub async fn seed_consumer(pool: &PgPool, name: &str, api_key: &str) -> i64 {
    ConsumerRepo::create(
        pool,
        &CreateConsumer {
            name: name.to_string(),
            api_key: api_key.to_string(),
            contact_email: format!("billing@{name}.test"),
            allowed_origins: vec![],
        },
    )
    .await
    .unwrap()
    .id
}

/// Seed a consumer (key [`INVOICE_API_KEY`]) and an invoice form. Fields are
/// inserted out of order; by position they read `customer`, `email`,
/// `total`, `comment`.
pub async fn seed_invoice_form(pool: &PgPool) -> i64 {
    let consumer_id = seed_consumer(pool, "globex", INVOICE_API_KEY).await;

    let text = field_type_id(pool, "text").await;
    let email = field_type_id(pool, "email").await;
    let decimal = field_type_id(pool, "decimal").await;
    let textarea = field_type_id(pool, "textarea").await;

    let form = FormRepo::create(
        pool,
        &CreateForm {
            consumer_id,
            code: "invoice".to_string(),
            fields: vec![
                field(textarea, "comment", 4, json!({}), None),
                field(decimal, "total", 3, json!({"min": 0, "max": 10000}), Some("currency")),
                field(text, "customer", 1, json!({"required": true}), None),
                field(email, "email", 2, json!({"email": true}), None),
            ],
        },
    )
    .await
    .unwrap();
    form.id
}
