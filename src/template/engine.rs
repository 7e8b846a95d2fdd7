// ABOUTME: Template engine composing conditional evaluation and placeholder substitution
// ABOUTME: Holds the lookup mode and substitution bound used for every resolution

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::conditions;
use super::context::{Context, FieldLookup};
use super::placeholders::{self, DEFAULT_MAX_SUBSTITUTIONS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub lookup: FieldLookup,
    /// Replacements allowed beyond one per `}` in the input
    #[serde(default = "default_max_substitutions")]
    pub max_substitutions: usize,
}

fn default_max_substitutions() -> usize {
    DEFAULT_MAX_SUBSTITUTIONS
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lookup: FieldLookup::Flat,
            max_substitutions: DEFAULT_MAX_SUBSTITUTIONS,
        }
    }
}

/// Resolves template markup against a context.
///
/// Conditional blocks are evaluated first so that placeholders inside hidden
/// blocks are never substituted. The engine keeps no state between calls.
#[derive(Debug, Clone, Default)]
pub struct TemplateEngine {
    config: EngineConfig,
}

impl TemplateEngine {
    /// Create an engine with flat field lookup
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Resolve dotted field names through nested context values
    pub fn with_path_lookup(mut self) -> Self {
        self.config.lookup = FieldLookup::Path;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate conditional blocks, then substitute placeholders
    pub fn resolve(&self, text: &str, context: Option<&Context>) -> String {
        let evaluated = self.evaluate(text, context);
        let resolved = self.substitute(&evaluated, context);
        debug!(
            "Resolved template ({} chars -> {} chars)",
            text.len(),
            resolved.len()
        );
        resolved
    }

    pub fn evaluate(&self, text: &str, context: Option<&Context>) -> String {
        conditions::evaluate_with(text, context, self.config.lookup)
    }

    pub fn substitute(&self, text: &str, context: Option<&Context>) -> String {
        placeholders::substitute_with(
            text,
            context,
            self.config.lookup,
            self.config.max_substitutions,
        )
    }

    /// Check if a string contains conditional or placeholder markup
    pub fn has_markup(&self, text: &str) -> bool {
        conditions::find_block(text).is_some() || (text.contains('{') && text.contains('}'))
    }
}
