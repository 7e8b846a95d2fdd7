// ABOUTME: Template source module for docmint
// ABOUTME: Reads raw template text from named resources before resolution

pub mod error;

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

pub use error::{Result, SourceError};

#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Read the full text of the named template
    async fn read(&self, path: &str) -> Result<String>;
}

/// Reads templates from the filesystem as UTF-8 text.
#[derive(Debug, Clone, Default)]
pub struct FileSource {
    base_dir: Option<PathBuf>,
}

impl FileSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative template paths against `base_dir`
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        match &self.base_dir {
            Some(base) => base.join(path),
            None => Path::new(path).to_path_buf(),
        }
    }
}

#[async_trait]
impl TemplateSource for FileSource {
    async fn read(&self, path: &str) -> Result<String> {
        let full_path = self.full_path(path);
        let content = fs::read_to_string(&full_path)
            .await
            .map_err(|e| SourceError::from_io(full_path.display().to_string(), e))?;

        debug!(
            "Read template {} ({} bytes)",
            full_path.display(),
            content.len()
        );
        Ok(content)
    }
}
