//! Connector picker commands
//!
//! `pick` runs the interactive dropdown; `list` and `show` print the same
//! derived state without a terminal UI.

use anyhow::{Context, Result};
use clap::Args;
use connpick::config::{Config, Deployment};
use connpick::control::search_options;
use connpick::{
    Catalog, CatalogLoader, ControlProps, FieldPath, FieldStore, FormState, FormType, Messages,
    ServiceTypeControl, report,
};
use std::path::PathBuf;

/// Field the connector id is bound to
const SERVICE_TYPE_FIELD: &str = "serviceType";

/// Catalog selection shared by all picker commands
#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// Catalog file (.yaml, .yml or .json); defaults to `catalogPath` from config
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Treat the deployment as cloud (hides OAuth-only connectors)
    #[arg(long)]
    pub cloud: bool,
}

/// Control inputs shared by `pick` and `show`
#[derive(Args, Debug, Clone)]
pub struct ControlArgs {
    /// Which side of the connection the form configures
    #[arg(long, value_enum, default_value_t = FormType::Source)]
    pub form_type: FormType,

    /// Current connector id in the form
    #[arg(long)]
    pub value: Option<String>,

    /// Editing an existing connector
    #[arg(long)]
    pub edit_mode: bool,

    /// Allow switching the connector while editing
    #[arg(long)]
    pub allow_change: bool,

    /// Documentation URL for the setup guide block
    #[arg(long)]
    pub documentation_url: Option<String>,
}

/// Load the catalog named on the command line or in the configuration
pub fn load_catalog(args: &CatalogArgs, config: &Config) -> Result<Catalog> {
    let path = args
        .catalog
        .clone()
        .or_else(|| config.catalog_path.clone())
        .context("No catalog given: pass --catalog or set catalogPath in the config")?;
    let catalog = CatalogLoader::load_file(&path)?;
    Ok(catalog)
}

/// Load messages, applying the configured override file if present
pub fn load_messages(config: &Config) -> Result<Messages> {
    match &config.messages_path {
        Some(path) => Messages::load_with_overrides(path),
        None => Ok(Messages::default()),
    }
}

/// Apply the command-line deployment flag on top of the loaded config
pub fn effective_config(mut config: Config, args: &CatalogArgs) -> Config {
    if args.cloud {
        config.deployment = Deployment::Cloud;
    }
    config
}

/// Build control props from command-line arguments and configuration
pub fn control_props(args: &ControlArgs, config: &Config) -> ControlProps {
    ControlProps {
        field: FieldPath::new(SERVICE_TYPE_FIELD),
        form_type: args.form_type,
        is_edit_mode: args.edit_mode,
        documentation_url: args.documentation_url.clone(),
        allow_change_connector: args.allow_change,
        excluded_connector_ids: config.excluded_connector_ids(),
    }
}

/// Print the options a user could pick, optionally narrowed by a search
pub fn handle_list(catalog_args: &CatalogArgs, search: Option<&str>, config: Config) -> Result<()> {
    let config = effective_config(config, catalog_args);
    let catalog = load_catalog(catalog_args, &config)?;
    let messages = load_messages(&config)?;

    let mut control = ServiceTypeControl::new(
        control_props(
            &ControlArgs {
                form_type: FormType::Source,
                value: None,
                edit_mode: false,
                allow_change: false,
                documentation_url: None,
            },
            &config,
        ),
        || {},
    );
    let options = control.options(&catalog);
    let matches = search_options(options, search.unwrap_or_default());

    for row in report::option_rows(&matches, &messages) {
        println!("{}", row);
    }
    tracing::debug!(shown = matches.len(), total = catalog.len(), "Listed connectors");
    Ok(())
}

/// Print the resolved selection for a field value
pub fn handle_show(catalog_args: &CatalogArgs, control_args: &ControlArgs, config: Config) -> Result<()> {
    let config = effective_config(config, catalog_args);
    let catalog = load_catalog(catalog_args, &config)?;
    let messages = load_messages(&config)?;

    let props = control_props(control_args, &config);
    let mut form = FormState::new();
    if let Some(value) = &control_args.value {
        form.set_value(&props.field, value.clone());
    }

    let mut control = ServiceTypeControl::new(props, || {});
    let view = control.view(&catalog, &form, &messages);
    for line in report::selection_report(&view, &messages) {
        println!("{}", line);
    }
    Ok(())
}

/// Run the interactive picker and print the chosen connector id
#[cfg(feature = "tui")]
pub async fn handle_pick(
    catalog_args: &CatalogArgs,
    control_args: &ControlArgs,
    config: Config,
) -> Result<()> {
    use connpick::tui::{App, Theme, run_tui};

    let config = effective_config(config, catalog_args);
    let catalog = load_catalog(catalog_args, &config)?;
    let messages = load_messages(&config)?;
    let props = control_props(control_args, &config);

    tracing::debug!(
        deployment = %config.deployment,
        excluded = props.excluded_connector_ids.len(),
        connectors = catalog.len(),
        "Starting connector picker"
    );

    let app = App::new(
        catalog,
        props,
        control_args.value.clone(),
        messages,
        Theme::default(),
        &config.ui,
    );

    if let Some(value) = run_tui(app, config.ui.enable_mouse).await? {
        println!("{}", value);
    }
    Ok(())
}
