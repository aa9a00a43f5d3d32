//! Common CLI utilities shared across all CLI commands.
//!
//! This module provides:
//! - `CliContext`: the loaded configuration and where it came from
//! - `print_info` for status lines

use crate::config::Config;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Shared context for CLI commands.
pub struct CliContext {
    /// The loaded configuration
    pub config: Config,
    /// Path to the config file
    pub config_path: PathBuf,
}

impl CliContext {
    /// Load the configuration from `config_override` or the default location,
    /// creating it with defaults when missing.
    pub fn load(config_override: Option<&Path>) -> Result<Self> {
        let config_path = resolve_config_path(config_override);
        let config =
            Config::load_or_create(&config_path).context("Failed to load configuration")?;
        Ok(Self {
            config,
            config_path,
        })
    }
}

/// The config file in use: an explicit `--config` path or the default one.
pub fn resolve_config_path(config_override: Option<&Path>) -> PathBuf {
    config_override.map_or_else(crate::utils::get_config_path, Path::to_path_buf)
}

/// Print an info message with an info sign prefix.
pub fn print_info(msg: &str) {
    println!("\u{2139}\u{FE0F} {}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_override_path_is_used_and_created() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let ctx = CliContext::load(Some(&path)).unwrap();
        assert_eq!(ctx.config_path, path);
        assert!(path.exists());
    }
}
