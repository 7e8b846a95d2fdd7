// ABOUTME: Configuration management for docmint
// ABOUTME: Handles loading configuration from YAML files and environment variables

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::render::command::default_wkhtmltopdf_args;
use crate::render::{CommandRenderer, DocumentRenderer, HttpRenderer, RenderOptions};
use crate::template::EngineConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base directory for relative template paths
    #[serde(default)]
    pub template_dir: Option<PathBuf>,

    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub render: RenderOptions,

    #[serde(default)]
    pub renderer: RendererConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RendererConfig {
    Command {
        program: String,
        #[serde(default)]
        args: Vec<String>,
    },
    Http {
        endpoint: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self::Command {
            program: "wkhtmltopdf".to_string(),
            args: default_wkhtmltopdf_args(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl RendererConfig {
    pub fn build(&self) -> Box<dyn DocumentRenderer> {
        match self {
            Self::Command { program, args } => {
                Box::new(CommandRenderer::new(program.clone(), args.clone()))
            }
            Self::Http { endpoint } => Box::new(HttpRenderer::new(endpoint.clone())),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::find_config_file(),
        };

        let mut config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            Self::from_yaml(&contents)?
        } else {
            Config::default()
        };

        config.merge_env()?;
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> PathBuf {
        let possible_paths = [
            PathBuf::from("docmint.yaml"),
            PathBuf::from("docmint.yml"),
            PathBuf::from(".docmint.yaml"),
        ];

        for path in possible_paths {
            if path.exists() {
                return path;
            }
        }

        if let Some(home_dir) = dirs::home_dir() {
            let home_config = home_dir.join(".docmint").join("config.yaml");
            if home_config.exists() {
                return home_config;
            }
        }

        // May not exist
        PathBuf::from("docmint.yaml")
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) -> Result<()> {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a variable source such as the process environment
    pub fn merge_vars<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = var("DOCMINT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("DOCMINT_LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Some(format) = var("DOCMINT_PAGE_FORMAT") {
            self.render.format = format;
        }
        if let Some(endpoint) = var("DOCMINT_RENDERER_ENDPOINT") {
            self.renderer = RendererConfig::Http { endpoint };
        }
        if let Some(max) = var("DOCMINT_MAX_SUBSTITUTIONS") {
            self.engine.max_substitutions = max.parse()?;
        }
        if let Some(dir) = var("DOCMINT_TEMPLATE_DIR") {
            self.template_dir = Some(PathBuf::from(dir));
        }

        Ok(())
    }
}
