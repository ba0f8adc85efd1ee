//! Configuration schema types for `ggst-team.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::color::parse_color;
use crate::options::RenderOptionsInput;

/// Directory settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Asset base directory (portraits, backgrounds, fonts)
    pub assets: Option<PathBuf>,
    /// Default output directory for generated images
    pub output: Option<PathBuf>,
}

/// Root of `ggst-team.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Render defaults; same keys as the command-line options
    pub render: RenderOptionsInput,
    pub paths: PathsConfig,
}

impl Config {
    /// Check value ranges and color syntax, collecting every problem.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let render = &self.render;

        if render.width == Some(0) {
            errors.push("render.width must be positive".to_string());
        }
        if render.height == Some(0) {
            errors.push("render.height must be positive".to_string());
        }
        if let Some(size) = render.font_size {
            if !(size.is_finite() && size > 0.0) {
                errors.push(format!("render.font_size must be positive (got {})", size));
            }
        }
        for (key, value) in
            [("background_color", &render.background_color), ("font_color", &render.font_color)]
        {
            if let Some(Err(e)) = value.as_deref().map(parse_color) {
                errors.push(format!("render.{}: {}", key, e));
            }
        }

        errors
    }
}

/// A config together with the directory relative paths resolve against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedConfig {
    pub config: Config,
    /// Directory containing the config file; `None` when no file was found
    pub root: Option<PathBuf>,
}
