use serde_json::{Map, Value};

use super::RenderStrategy;
use crate::schema::DEFAULT_RENDER_STRATEGY;

/// Returns the raw value unchanged. Also serves as the registry fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityRenderer;

impl RenderStrategy for IdentityRenderer {
    fn alias(&self) -> &'static str {
        DEFAULT_RENDER_STRATEGY
    }

    fn render(&self, value: &Value, _options: &Map<String, Value>) -> Value {
        value.clone()
    }
}
