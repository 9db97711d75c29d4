//! connpick - a searchable terminal dropdown for picking connectors
//!
//! Loads a connector catalog, hides connectors the deployment does not allow
//! for new selections, and lets the user pick one interactively or inspect
//! the derived options from the command line.

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cli::{CatalogArgs, ConfigSubcommand, ControlArgs};
use connpick::config::ConfigLoader;
use std::path::PathBuf;

/// connpick - a searchable terminal dropdown for picking connectors
#[derive(Parser, Debug)]
#[command(name = "connpick", version)]
#[command(about = "A searchable terminal dropdown for picking source and destination connectors", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd', global = true)]
    debug: bool,

    /// Directory holding config.yaml (overrides CONNPICK_CONFIG_DIR)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Pick a connector interactively
    #[cfg(feature = "tui")]
    Pick {
        #[command(flatten)]
        catalog: CatalogArgs,
        #[command(flatten)]
        control: ControlArgs,
    },
    /// List the connectors offered by the dropdown
    List {
        #[command(flatten)]
        catalog: CatalogArgs,
        /// Only show connectors whose name contains this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Show the selection, setup guide and warning for a connector id
    Show {
        #[command(flatten)]
        catalog: CatalogArgs,
        #[command(flatten)]
        control: ControlArgs,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_file = cli::init_logging(args.debug)?;
    if let Some(ref log_path) = log_file {
        // Printed before the TUI takes over the terminal
        eprintln!(
            "Debug logging enabled. Logs written to: {}",
            log_path.display()
        );
    }

    let config_dir = args.config_dir.as_deref();

    if let Command::Config { subcommand } = args.command {
        return cli::handle_config_command(subcommand, config_dir);
    }

    let config = ConfigLoader::load(config_dir).context("Failed to load configuration")?;
    tracing::debug!(
        "Configuration loaded: deployment={}, noIcons={}",
        config.deployment,
        config.ui.no_icons
    );

    match args.command {
        #[cfg(feature = "tui")]
        Command::Pick { catalog, control } => cli::handle_pick(&catalog, &control, config).await,
        Command::List { catalog, search } => cli::handle_list(&catalog, search.as_deref(), config),
        Command::Show { catalog, control } => cli::handle_show(&catalog, &control, config),
        Command::Config { .. } => Ok(()),
    }
}
