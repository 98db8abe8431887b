//! Pluggable value rendering.
//!
//! Each field names a render strategy by alias. Strategies live in a
//! [`RendererRegistry`] assembled once at startup; an unknown alias falls
//! back to [`IdentityRenderer`] so presentation problems never block a
//! submission.

pub mod currency;
pub mod identity;
pub mod registry;

use serde_json::{Map, Value};

pub use currency::CurrencyRenderer;
pub use identity::IdentityRenderer;
pub use registry::RendererRegistry;

/// Maps a raw value plus field options to a display/snapshot value.
///
/// Implementations must be total: any input yields a rendered value.
pub trait RenderStrategy: Send + Sync {
    /// Stable alias fields use to select this strategy.
    fn alias(&self) -> &'static str;

    fn render(&self, value: &Value, options: &Map<String, Value>) -> Value;
}
