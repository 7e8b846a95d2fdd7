// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides in-memory template sources, recording renderers, and fixture files

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use docmint::render::{
    DocumentRenderer, RenderError, RenderRequest, RenderedDocument, Result as RenderResult,
};
use docmint::source::{Result as SourceResult, SourceError, TemplateSource};

pub const EMPLOYEE_TEMPLATE: &str = r#"<html>
<body>
<h1>{employeeName}</h1>
?{show <p>Salary: {salary}</p>}?
?{isUnemployed <p>Currently looking for work.</p>}?
?{!isUnemployed <p>Employed ?{salary with pay}?</p>}?
</body>
</html>"#;

#[derive(Default)]
pub struct MemorySource {
    templates: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(mut self, path: &str, content: &str) -> Self {
        self.templates.insert(path.to_string(), content.to_string());
        self
    }
}

#[async_trait]
impl TemplateSource for MemorySource {
    async fn read(&self, path: &str) -> SourceResult<String> {
        self.templates
            .get(path)
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                path: path.to_string(),
            })
    }
}

/// Renderer that echoes the markup back and remembers every request
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    requests: Arc<Mutex<Vec<RenderRequest>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<RenderRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentRenderer for RecordingRenderer {
    async fn render(&self, request: &RenderRequest) -> RenderResult<RenderedDocument> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(RenderedDocument::new(
            request.content.clone().into_bytes(),
            self.name(),
        ))
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

pub struct FailingRenderer;

#[async_trait]
impl DocumentRenderer for FailingRenderer {
    async fn render(&self, _request: &RenderRequest) -> RenderResult<RenderedDocument> {
        Err(RenderError::EmptyDocument {
            renderer: self.name().to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// Write a template file into a fresh temporary directory
pub fn write_template(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    (temp_dir, path)
}
