use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub parser: ParserConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Knobs for finding decomposition. Defaults reproduce the report page's behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct ParserConfig {
    /// Maximum snippet length in characters before truncation
    #[serde(default = "default_snippet_limit")]
    pub snippet_limit: usize,

    /// Marker appended to truncated snippets
    #[serde(default = "default_ellipsis")]
    pub ellipsis: String,

    /// Title used when a finding has no bold span
    #[serde(default = "default_untitled_title")]
    pub untitled_title: String,

    /// Link text used when a finding has no markdown link
    #[serde(default = "default_link_text")]
    pub default_link_text: String,

    /// Link target used when a finding has no markdown link
    #[serde(default = "default_link_url")]
    pub default_link_url: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            snippet_limit: default_snippet_limit(),
            ellipsis: default_ellipsis(),
            untitled_title: default_untitled_title(),
            default_link_text: default_link_text(),
            default_link_url: default_link_url(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
