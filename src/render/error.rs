// ABOUTME: Error types for document rendering
// ABOUTME: Wraps failures of external renderer processes and services

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Renderer command {program} failed with {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("Renderer service returned status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Renderer {renderer} produced an empty document")]
    EmptyDocument { renderer: String },

    #[error("Invalid render options: {0}")]
    InvalidOptions(#[from] crate::template::TemplateError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Join error: {0}")]
    JoinError(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, RenderError>;
