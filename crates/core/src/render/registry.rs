use std::collections::HashMap;

use super::{CurrencyRenderer, IdentityRenderer, RenderStrategy};
use crate::error::CoreError;

static FALLBACK: IdentityRenderer = IdentityRenderer;

/// Process-wide set of render strategies, keyed by alias.
///
/// Built once at startup and shared read-only (typically behind an `Arc`)
/// across concurrent submission attempts.
pub struct RendererRegistry {
    strategies: Vec<Box<dyn RenderStrategy>>,
    by_alias: HashMap<&'static str, usize>,
}

impl RendererRegistry {
    /// Build a registry from an explicit list of strategies.
    ///
    /// Fails with [`CoreError::Conflict`] if two strategies report the same
    /// alias.
    pub fn new(strategies: Vec<Box<dyn RenderStrategy>>) -> Result<Self, CoreError> {
        let mut by_alias = HashMap::with_capacity(strategies.len());
        for (index, strategy) in strategies.iter().enumerate() {
            let alias = strategy.alias();
            if by_alias.insert(alias, index).is_some() {
                return Err(CoreError::Conflict(format!(
                    "duplicate renderer alias '{alias}'"
                )));
            }
        }
        Ok(Self {
            strategies,
            by_alias,
        })
    }

    /// The stock strategies: `default` (identity) and `currency`.
    pub fn builtin() -> Self {
        let strategies: Vec<Box<dyn RenderStrategy>> =
            vec![Box::new(IdentityRenderer), Box::new(CurrencyRenderer)];
        let by_alias = strategies
            .iter()
            .enumerate()
            .map(|(index, strategy)| (strategy.alias(), index))
            .collect();
        Self {
            strategies,
            by_alias,
        }
    }

    /// Resolve an alias by exact match, falling back to identity on a miss.
    pub fn resolve(&self, alias: &str) -> &dyn RenderStrategy {
        match self.by_alias.get(alias) {
            Some(&index) => self.strategies[index].as_ref(),
            None => &FALLBACK,
        }
    }

    /// Whether a strategy is registered under `alias`.
    pub fn contains(&self, alias: &str) -> bool {
        self.by_alias.contains_key(alias)
    }

    /// Registered aliases in registration order.
    pub fn aliases(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.alias()).collect()
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RendererRegistry")
            .field("aliases", &self.aliases())
            .finish()
    }
}
