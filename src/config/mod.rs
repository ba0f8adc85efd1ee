//! Configuration for ggst-team
//!
//! Provides discovery, types and loading for the optional `ggst-team.toml` file.

mod loader;
mod schema;

pub use loader::{find_config, find_config_from, load_config, resolve_path, ConfigError, CONFIG_FILE_NAME};
pub use schema::{Config, LoadedConfig, PathsConfig};
