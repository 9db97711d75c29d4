//! Configuration loading and merging logic
//!
//! Handles loading configuration from multiple sources and merging them
//! according to precedence rules.

use super::{paths, schema::Config};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers merged
    ///
    /// Precedence order (highest to lowest):
    /// 1. Environment variable overrides
    /// 2. Config file (`config.yaml` in `dir`, or the platform config directory)
    /// 3. Built-in defaults
    pub fn load(dir: Option<&Path>) -> Result<Config> {
        let path = match dir {
            Some(dir) => paths::config_path_in(dir),
            None => paths::root_config_path(),
        };

        let config = if path.exists() {
            Self::load_file(&path)?
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Self::load_defaults()
        };

        Ok(Self::apply_env_overrides(config))
    }

    /// Load configuration from a file
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load default configuration
    pub fn load_defaults() -> Config {
        Config::default()
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(config: Config) -> Config {
        Self::apply_overrides(config, |key| std::env::var(key).ok())
    }

    fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
        // CONNPICK_DEPLOYMENT override
        if let Some(deployment) = lookup("CONNPICK_DEPLOYMENT") {
            match deployment.parse() {
                Ok(val) => config.deployment = val,
                Err(e) => tracing::warn!("Ignoring CONNPICK_DEPLOYMENT: {}", e),
            }
        }

        // CONNPICK_CLOUD=true forces the cloud deployment
        if let Some(cloud) = lookup("CONNPICK_CLOUD") {
            if cloud.trim() == "true" {
                config.deployment = super::Deployment::Cloud;
            }
        }

        // CONNPICK_CATALOG override
        if let Some(catalog) = lookup("CONNPICK_CATALOG") {
            config.catalog_path = Some(PathBuf::from(catalog));
        }

        config
    }

    /// Save configuration to a file
    pub fn save(config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            paths::ensure_dir(parent)?;
        }

        let yaml =
            serde_yaml::to_string(config).context("Failed to serialize configuration to YAML")?;

        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
