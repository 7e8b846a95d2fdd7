// ABOUTME: Error types for document generation
// ABOUTME: Surfaces template read failures and renderer failures to the caller

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Template source error: {0}")]
    SourceRead(#[from] crate::source::SourceError),

    #[error("Render error: {0}")]
    Render(#[from] crate::render::RenderError),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
