// ABOUTME: Error types for template source reads
// ABOUTME: Distinguishes missing templates from unreadable ones

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Template not found: {path}")]
    NotFound { path: String },

    #[error("Failed to read template {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    pub fn from_io(path: impl Into<String>, error: std::io::Error) -> Self {
        let path = path.into();
        match error.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Unreadable {
                path,
                source: error,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, SourceError>;
