// ABOUTME: Error types for template engine operations
// ABOUTME: Covers context construction; markup resolution itself never fails

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Invalid template context: expected a JSON object, found {found}")]
    InvalidContext { found: String },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
