//! Configuration loading and discovery for `ggst-team.toml`

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::schema::{Config, LoadedConfig};

/// File name searched for during discovery.
pub const CONFIG_FILE_NAME: &str = "ggst-team.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config '{}': {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
    /// TOML parse error
    #[error("Failed to parse '{}': {source}", path.display())]
    Parse { path: PathBuf, source: toml::de::Error },
    /// Value checks failed
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// Find the config file by walking up from the current working directory,
/// then falling back to `$XDG_CONFIG_HOME/ggst-team/` (or `~/.config/ggst-team/`).
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }
    find_xdg_config()
}

fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let path = xdg_config.join("ggst-team").join(CONFIG_FILE_NAME);
    path.is_file().then_some(path)
}

/// Walk up from `start` looking for the config file.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let path = current.join(CONFIG_FILE_NAME);
        if path.is_file() {
            return Some(path);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load the config at `path`, or the discovered one when `path` is `None`.
///
/// No config file at all is not an error: the empty config is returned.
pub fn load_config(path: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match find_config() {
            Some(p) => p,
            None => {
                tracing::debug!("no config file found");
                return Ok(LoadedConfig::default());
            }
        },
    };

    let contents = fs::read_to_string(&path)
        .map_err(|source| ConfigError::Io { path: path.clone(), source })?;
    let config: Config = toml::from_str(&contents)
        .map_err(|source| ConfigError::Parse { path: path.clone(), source })?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors));
    }

    tracing::debug!(path = %path.display(), "config loaded");
    Ok(LoadedConfig { config, root: path.parent().map(Path::to_path_buf) })
}

/// Resolve a config path against the config file's directory.
///
/// Absolute paths are returned unchanged.
pub fn resolve_path(root: Option<&Path>, path: &Path) -> PathBuf {
    match root {
        Some(root) if !path.is_absolute() => root.join(path),
        _ => path.to_path_buf(),
    }
}
