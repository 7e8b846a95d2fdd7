// ABOUTME: Main library module for docmint
// ABOUTME: Exports the template engine, rendering seams, and the document generation pipeline

pub mod config;
pub mod generator;
pub mod logging;
pub mod render;
pub mod source;
pub mod template;

// Re-export commonly used types
pub use config::Config;
pub use generator::{DocumentGenerator, GenerateError};
pub use render::{DocumentRenderer, RenderOptions, RenderedDocument};
pub use source::{FileSource, TemplateSource};
pub use template::{evaluate, substitute, Context, TemplateEngine};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
