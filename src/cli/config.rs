//! Configuration subcommands

use anyhow::{Context, Result};
use clap::Subcommand;
use connpick::config::{self, ConfigLoader, paths};
use std::path::Path;

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get configuration value
    Get {
        /// Configuration key (e.g., "deployment", "ui.noIcons")
        key: Option<String>,
    },
    /// Set configuration value
    Set {
        /// Configuration key (e.g., "deployment", "ui.noIcons")
        key: String,
        /// Configuration value
        value: String,
    },
    /// List all configuration
    List,
    /// Show configuration file path
    Path,
    /// Validate configuration
    Validate,
}

/// Handle configuration subcommands
pub fn handle_config_command(cmd: ConfigSubcommand, config_dir: Option<&Path>) -> Result<()> {
    let config_path = match config_dir {
        Some(dir) => paths::config_path_in(dir),
        None => paths::root_config_path(),
    };

    match cmd {
        ConfigSubcommand::Get { key } => {
            let config = ConfigLoader::load(config_dir).context("Failed to load configuration")?;

            if let Some(key) = key {
                println!("{}", config::get_config_value(&config, &key)?);
            } else {
                let yaml =
                    serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
                print!("{}", yaml);
            }
        }
        ConfigSubcommand::Set { key, value } => {
            // Start from the file alone so environment overrides are not persisted
            let mut config = if config_path.exists() {
                ConfigLoader::load_file(&config_path)?
            } else {
                ConfigLoader::load_defaults()
            };

            config::set_config_value(&mut config, &key, &value)
                .with_context(|| format!("Failed to set {} = {}", key, value))?;

            ConfigLoader::save(&config, &config_path).context("Failed to save configuration")?;
            println!("Configuration saved");
        }
        ConfigSubcommand::List => {
            let config = ConfigLoader::load(config_dir).context("Failed to load configuration")?;
            let yaml =
                serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
            print!("{}", yaml);

            let excluded = config.excluded_connector_ids();
            if !excluded.is_empty() {
                println!("# effective exclusions: {}", excluded.join(", "));
            }
        }
        ConfigSubcommand::Path => {
            println!("{}", config_path.display());
        }
        ConfigSubcommand::Validate => match ConfigLoader::load(config_dir) {
            Ok(_) => println!("Configuration is valid"),
            Err(e) => {
                eprintln!("Configuration validation failed: {:#}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
