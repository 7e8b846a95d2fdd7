// ABOUTME: Document generation pipeline for docmint
// ABOUTME: Reads a template, resolves its markup against a context, and renders the result

pub mod error;

use tracing::{debug, info};

use crate::config::Config;
use crate::render::{DocumentRenderer, RenderOptions, RenderRequest, RenderedDocument};
use crate::source::{FileSource, TemplateSource};
use crate::template::{Context, TemplateEngine};

pub use error::{GenerateError, Result};

/// Composes template read, conditional evaluation, placeholder substitution
/// and rendering.
///
/// Each call is independent: no template or document is cached, and a
/// failure at any step is returned as-is without retrying.
pub struct DocumentGenerator {
    source: Box<dyn TemplateSource>,
    renderer: Box<dyn DocumentRenderer>,
    engine: TemplateEngine,
    options: RenderOptions,
}

impl DocumentGenerator {
    pub fn new(source: Box<dyn TemplateSource>, renderer: Box<dyn DocumentRenderer>) -> Self {
        Self {
            source,
            renderer,
            engine: TemplateEngine::new(),
            options: RenderOptions::default(),
        }
    }

    /// Build a generator reading templates from disk with the configured
    /// renderer, engine settings and render options
    pub fn from_config(config: &Config) -> Self {
        let source = match &config.template_dir {
            Some(dir) => FileSource::with_base_dir(dir),
            None => FileSource::new(),
        };
        Self::new(Box::new(source), config.renderer.build())
            .with_engine(TemplateEngine::with_config(config.engine.clone()))
            .with_options(config.render.clone())
    }

    pub fn with_engine(mut self, engine: TemplateEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Render options used by [`DocumentGenerator::generate_default`]
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn engine(&self) -> &TemplateEngine {
        &self.engine
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Read a template and resolve its markup without rendering it
    pub async fn resolve_template(&self, path: &str, context: Option<&Context>) -> Result<String> {
        let text = self.source.read(path).await?;
        Ok(self.engine.resolve(&text, context))
    }

    /// Generate a document from the template at `path`
    pub async fn generate(
        &self,
        path: &str,
        context: Option<&Context>,
        options: &RenderOptions,
    ) -> Result<RenderedDocument> {
        let content = self.resolve_template(path, context).await?;
        debug!(
            "Rendering {} with {} renderer ({} chars)",
            path,
            self.renderer.name(),
            content.len()
        );

        let request = RenderRequest::new(content, options.clone());
        let document = self.renderer.render(&request).await?;

        info!("Generated document from {} ({} bytes)", path, document.len());
        Ok(document)
    }

    /// Generate a document with the generator's own render options
    pub async fn generate_default(
        &self,
        path: &str,
        context: Option<&Context>,
    ) -> Result<RenderedDocument> {
        self.generate(path, context, &self.options).await
    }
}
