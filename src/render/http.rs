// ABOUTME: Renderer that posts resolved markup to an HTTP rendering service
// ABOUTME: Sends the render request as JSON and returns the response body as the document

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use super::error::{RenderError, Result};
use super::{DocumentRenderer, RenderRequest, RenderedDocument};

/// Posts `{"content": ..., "options": {...}}` to a rendering service.
pub struct HttpRenderer {
    endpoint: String,
    http_client: Client,
}

impl HttpRenderer {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(endpoint, Client::new())
    }

    pub fn with_client(endpoint: impl Into<String>, http_client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            http_client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl DocumentRenderer for HttpRenderer {
    async fn render(&self, request: &RenderRequest) -> Result<RenderedDocument> {
        debug!(
            "Posting {} chars of markup to {}",
            request.content.len(),
            self.endpoint
        );

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => format!("<failed to read response body: {}>", e),
            };
            return Err(RenderError::HttpStatus { status, body });
        }

        let bytes = response.bytes().await?.to_vec();
        if bytes.is_empty() {
            return Err(RenderError::EmptyDocument {
                renderer: self.endpoint.clone(),
            });
        }

        info!(
            "Rendered document via {} ({} bytes)",
            self.endpoint,
            bytes.len()
        );
        Ok(RenderedDocument::new(bytes, self.name()))
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
