// ABOUTME: Configuration types for document rendering
// ABOUTME: Defines page format, margins, and renderer pass-through options

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Options handed to the renderer alongside the resolved markup.
///
/// Keys are camelCase on the wire. Options a particular renderer understands
/// beyond the common ones go in `extra` and are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default)]
    pub margin: PageMargins,
    #[serde(default)]
    pub landscape: bool,
    #[serde(default)]
    pub print_background: bool,
    #[serde(default, flatten)]
    pub extra: Map<String, JsonValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMargins {
    #[serde(default = "default_margin")]
    pub top: String,
    #[serde(default = "default_margin")]
    pub bottom: String,
    #[serde(default = "default_margin")]
    pub left: String,
    #[serde(default = "default_margin")]
    pub right: String,
}

fn default_format() -> String {
    "A4".to_string()
}

fn default_margin() -> String {
    "50px".to_string()
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: default_format(),
            margin: PageMargins::default(),
            landscape: false,
            print_background: false,
            extra: Map::new(),
        }
    }
}

impl Default for PageMargins {
    fn default() -> Self {
        Self::uniform(default_margin())
    }
}

impl PageMargins {
    /// Same margin on every side
    pub fn uniform(margin: impl Into<String>) -> Self {
        let margin = margin.into();
        Self {
            top: margin.clone(),
            bottom: margin.clone(),
            left: margin.clone(),
            right: margin,
        }
    }
}

impl RenderOptions {
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_margin(mut self, margin: PageMargins) -> Self {
        self.margin = margin;
        self
    }

    /// Add a renderer-specific option
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
