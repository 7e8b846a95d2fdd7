// ABOUTME: Renderer that pipes resolved markup through an external program
// ABOUTME: Builds arguments from render options and reads the document from stdout

use async_trait::async_trait;
use std::io::ErrorKind;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, error, info};

use super::config::RenderOptions;
use super::error::{RenderError, Result};
use super::{DocumentRenderer, RenderRequest, RenderedDocument};
use crate::template::{Context, TemplateEngine};

/// Runs a converter such as `wkhtmltopdf` with markup on stdin.
///
/// Arguments are templates resolved against the serialized [`RenderOptions`]
/// with dotted lookup, so `{format}` and `{margin.top}` expand to option
/// values and `?{landscape --orientation}?` only appears when landscape is
/// set. Arguments that resolve to an empty string are dropped.
#[derive(Debug, Clone)]
pub struct CommandRenderer {
    program: String,
    args: Vec<String>,
    engine: TemplateEngine,
}

impl CommandRenderer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            engine: TemplateEngine::new().with_path_lookup(),
        }
    }

    /// `wkhtmltopdf` reading HTML from stdin and writing PDF to stdout
    pub fn wkhtmltopdf() -> Self {
        Self::new("wkhtmltopdf", default_wkhtmltopdf_args())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Resolve argument templates for the given options
    pub fn build_args(&self, options: &RenderOptions) -> Result<Vec<String>> {
        let context = Context::from_serializable(options)?;
        Ok(self
            .args
            .iter()
            .map(|arg| {
                if self.engine.has_markup(arg) {
                    self.engine.resolve(arg, Some(&context))
                } else {
                    arg.clone()
                }
            })
            .filter(|arg| !arg.is_empty())
            .collect())
    }
}

pub fn default_wkhtmltopdf_args() -> Vec<String> {
    [
        "--quiet",
        "--page-size",
        "{format}",
        "--margin-top",
        "{margin.top}",
        "--margin-bottom",
        "{margin.bottom}",
        "--margin-left",
        "{margin.left}",
        "--margin-right",
        "{margin.right}",
        "?{landscape --orientation}?",
        "?{landscape Landscape}?",
        "?{printBackground --background}?",
        "?{!printBackground --no-background}?",
        "-",
        "-",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[async_trait]
impl DocumentRenderer for CommandRenderer {
    async fn render(&self, request: &RenderRequest) -> Result<RenderedDocument> {
        let args = self.build_args(&request.options)?;
        debug!("Running renderer: {} {:?}", self.program, args);

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let mut stdin = child.stdin.take().ok_or_else(|| {
            RenderError::IoError(std::io::Error::other("renderer stdin was not captured"))
        })?;
        let content = request.content.clone().into_bytes();
        let writer = tokio::spawn(async move {
            stdin.write_all(&content).await?;
            stdin.shutdown().await
        });

        let output = child.wait_with_output().await?;
        let write_result = writer.await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            error!("Renderer {} failed: {}", self.program, stderr);
            return Err(RenderError::CommandFailed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr,
            });
        }

        // A converter may exit before draining stdin
        match write_result {
            Err(e) if e.kind() != ErrorKind::BrokenPipe => return Err(e.into()),
            _ => {}
        }

        if output.stdout.is_empty() {
            return Err(RenderError::EmptyDocument {
                renderer: self.program.clone(),
            });
        }

        info!(
            "Rendered document with {} ({} bytes)",
            self.program,
            output.stdout.len()
        );
        Ok(RenderedDocument::new(output.stdout, self.name()))
    }

    fn name(&self) -> &'static str {
        "command"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PageMargins;

    #[test]
    fn test_default_args() {
        let renderer = CommandRenderer::wkhtmltopdf();
        let args = renderer.build_args(&RenderOptions::default()).unwrap();

        assert_eq!(
            args,
            vec![
                "--quiet",
                "--page-size",
                "A4",
                "--margin-top",
                "50px",
                "--margin-bottom",
                "50px",
                "--margin-left",
                "50px",
                "--margin-right",
                "50px",
                "--no-background",
                "-",
                "-",
            ]
        );
    }

    #[test]
    fn test_conditional_args() {
        let renderer = CommandRenderer::wkhtmltopdf();
        let options = RenderOptions {
            landscape: true,
            print_background: true,
            margin: PageMargins::uniform("1cm"),
            ..RenderOptions::default()
        };
        let args = renderer.build_args(&options).unwrap();

        assert!(args.windows(2).any(|w| w == ["--orientation", "Landscape"]));
        assert!(args.contains(&"--background".to_string()));
        assert!(!args.contains(&"--no-background".to_string()));
        assert!(args.windows(2).any(|w| w == ["--margin-top", "1cm"]));
    }

    #[test]
    fn test_plain_args_pass_through() {
        let renderer = CommandRenderer::new(
            "convert",
            vec!["--title".to_string(), "Q1 ?report".to_string(), "{}".to_string()],
        );

        assert_eq!(
            renderer.build_args(&RenderOptions::default()).unwrap(),
            vec!["--title", "Q1 ?report", "{}"]
        );
    }

    #[test]
    fn test_extra_options_in_args() {
        let renderer = CommandRenderer::new("convert", vec!["--dpi={dpi}".to_string()]);
        let options = RenderOptions::default().with_option("dpi", 300);

        assert_eq!(renderer.build_args(&options).unwrap(), vec!["--dpi=300"]);
    }

    #[tokio::test]
    async fn test_render_through_cat() {
        let renderer = CommandRenderer::new("cat", Vec::new());
        let request = RenderRequest::new("<p>Hello</p>", RenderOptions::default());

        let document = renderer.render(&request).await.unwrap();
        assert_eq!(document.bytes, b"<p>Hello</p>");
        assert_eq!(document.renderer, "command");
    }

    #[tokio::test]
    async fn test_render_passes_options() {
        let renderer = CommandRenderer::new(
            "sh",
            vec!["-c".to_string(), "cat; printf ' %s' \"$0\"".to_string(), "{format}".to_string()],
        );
        let request = RenderRequest::new("doc", RenderOptions::default().with_format("Letter"));

        let document = renderer.render(&request).await.unwrap();
        assert_eq!(document.bytes, b"doc Letter");
    }

    #[tokio::test]
    async fn test_failing_command() {
        let renderer = CommandRenderer::new(
            "sh",
            vec!["-c".to_string(), "echo broken >&2; exit 3".to_string()],
        );
        let request = RenderRequest::new("<p>Hello</p>", RenderOptions::default());

        match renderer.render(&request).await {
            Err(RenderError::CommandFailed { stderr, .. }) => assert_eq!(stderr, "broken"),
            other => panic!("expected command failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_output() {
        let renderer = CommandRenderer::new("true", Vec::new());
        let request = RenderRequest::new("<p>Hello</p>", RenderOptions::default());

        let err = renderer.render(&request).await.unwrap_err();
        assert!(matches!(err, RenderError::EmptyDocument { .. }));
    }

    #[tokio::test]
    async fn test_missing_program() {
        let renderer = CommandRenderer::new("docmint-no-such-renderer", Vec::new());
        let request = RenderRequest::new("x", RenderOptions::default());

        let err = renderer.render(&request).await.unwrap_err();
        assert!(matches!(err, RenderError::IoError(_)));
    }
}
