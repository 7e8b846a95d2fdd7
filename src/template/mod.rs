// ABOUTME: Template engine module for docmint
// ABOUTME: Provides conditional block evaluation, placeholder substitution, and context lookup

pub mod conditions;
pub mod context;
pub mod engine;
pub mod error;
pub mod placeholders;

pub use conditions::{evaluate, ConditionalBlock};
pub use context::{display_value, is_truthy, Context, FieldLookup};
pub use engine::{EngineConfig, TemplateEngine};
pub use error::{Result, TemplateError};
pub use placeholders::substitute;
