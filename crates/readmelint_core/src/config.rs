//! Tool configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Style for rewriting multi-line code blocks during auto-fix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultiLineStyle {
    /// 4-space indented code, fence markers removed (classic readme style).
    #[default]
    Indented,
    /// Keep ``` fence markers.
    Fenced,
}

/// Configuration for the readme toolkit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadmeConfig {
    /// How auto-fix rewrites multi-line code blocks.
    #[serde(default)]
    pub multi_line_style: MultiLineStyle,

    /// Whether the preview embeds recognized video URLs.
    #[serde(default = "default_true")]
    pub allow_videos: bool,

    /// Whether the preview passes raw HTML through.
    #[serde(default)]
    pub allow_html: bool,

    /// Base URL for relative links in the preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

fn default_true() -> bool {
    true
}

impl ReadmeConfig {
    /// Config file names searched by [`ReadmeConfig::discover`], in order.
    pub const CONFIG_FILES: &'static [&'static str] = &[".readmelint.jsonc", ".readmelint.json"];

    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            multi_line_style: MultiLineStyle::Indented,
            allow_videos: true,
            allow_html: false,
            base_url: None,
        }
    }

    /// Loads configuration from a file. JSONC comments are allowed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| CoreError::config(format!("Failed to read config: {e}")))?;
        Self::from_json(&content)
    }

    /// Parses configuration from a JSON/JSONC string.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let value = jsonc_parser::parse_to_serde_value(json, &jsonc_parser::ParseOptions::default())
            .map_err(|e| CoreError::config(format!("Invalid config: {e}")))?
            .unwrap_or(serde_json::Value::Object(serde_json::Map::new()));

        serde_json::from_value(value)
            .map_err(|e| CoreError::config(format!("Invalid config: {e}")))
    }

    /// Searches `dir` and its ancestors for a config file.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let mut current = Some(dir.as_ref().to_path_buf());
        while let Some(dir) = current {
            for name in Self::CONFIG_FILES {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
            current = dir.parent().map(Path::to_path_buf);
        }
        None
    }
}

impl Default for ReadmeConfig {
    fn default() -> Self {
        Self::new()
    }
}
