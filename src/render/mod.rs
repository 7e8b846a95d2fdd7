// ABOUTME: Document rendering module for docmint
// ABOUTME: Hands resolved markup to an external renderer and collects the binary document

pub mod command;
pub mod config;
pub mod error;
pub mod http;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use tokio::fs;

pub use command::CommandRenderer;
pub use config::{PageMargins, RenderOptions};
pub use error::{RenderError, Result};
pub use http::HttpRenderer;

/// Resolved markup plus the options for turning it into a document.
#[derive(Debug, Clone, Serialize)]
pub struct RenderRequest {
    pub content: String,
    pub options: RenderOptions,
}

#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub renderer: String,
    pub generated_at: DateTime<Utc>,
}

#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    async fn render(&self, request: &RenderRequest) -> Result<RenderedDocument>;

    fn name(&self) -> &'static str;
}

impl RenderRequest {
    pub fn new(content: impl Into<String>, options: RenderOptions) -> Self {
        Self {
            content: content.into(),
            options,
        }
    }
}

impl RenderedDocument {
    pub fn new(bytes: Vec<u8>, renderer: &str) -> Self {
        Self {
            bytes,
            renderer: renderer.to_string(),
            generated_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write the document to a file, creating parent directories
    pub async fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        fs::write(path, &self.bytes).await
    }
}
