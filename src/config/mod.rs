//! Configuration system for connpick
//!
//! Layered configuration: built-in defaults, a YAML file in the platform
//! config directory, and environment overrides.

pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{CLOUD_EXCLUDED_CONNECTORS, Config, Deployment, UiConfig};

use anyhow::Context;
use std::path::PathBuf;

/// Get a configuration value by key (dot notation)
pub fn get_config_value(config: &Config, key: &str) -> anyhow::Result<String> {
    match key {
        "deployment" => Ok(config.deployment.to_string()),
        "excludedConnectors" => Ok(config.excluded_connectors.join(",")),
        "catalogPath" => Ok(config
            .catalog_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        "messagesPath" => Ok(config
            .messages_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        "ui.noIcons" => Ok(config.ui.no_icons.to_string()),
        "ui.enableMouse" => Ok(config.ui.enable_mouse.to_string()),
        "ui.pageSize" => Ok(config.ui.page_size.to_string()),
        _ => Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
}

/// Set a configuration value by key (dot notation)
pub fn set_config_value(config: &mut Config, key: &str, value: &str) -> anyhow::Result<()> {
    match key {
        "deployment" => {
            config.deployment = value.parse()?;
        }
        "excludedConnectors" => {
            config.excluded_connectors = value
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        "catalogPath" => {
            config.catalog_path = optional_path(value);
        }
        "messagesPath" => {
            config.messages_path = optional_path(value);
        }
        "ui.noIcons" => {
            config.ui.no_icons = value
                .parse()
                .context("ui.noIcons must be 'true' or 'false'")?;
        }
        "ui.enableMouse" => {
            config.ui.enable_mouse = value
                .parse()
                .context("ui.enableMouse must be 'true' or 'false'")?;
        }
        "ui.pageSize" => {
            let size: usize = value.parse().context("ui.pageSize must be a number")?;
            if size == 0 {
                return Err(anyhow::anyhow!("ui.pageSize must be at least 1"));
            }
            config.ui.page_size = size;
        }
        _ => return Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }

    Ok(())
}

fn optional_path(value: &str) -> Option<PathBuf> {
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}
