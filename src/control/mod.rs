//! Connector service-type control
//!
//! Headless core of the connector dropdown: it derives the option list and
//! the selected connector from the catalog and the bound field, and turns
//! user selections into field writes and callbacks. Rendering lives in
//! `tui::views`, which consumes the [`ControlView`] built here.

mod memo;
pub mod options;

pub use memo::Memo;
pub use options::{
    DropDownOption, build_options, default_option_sort, natural_cmp, search_options,
};

use crate::catalog::{Catalog, ConnectorDefinition, ReleaseStage};
use crate::form::{FieldPath, FieldState, FieldStore};
use crate::messages::Messages;
use std::fmt;

/// Which side of a connection the form configures
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormType {
    Source,
    Destination,
}

impl FormType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormType::Source => "source",
            FormType::Destination => "destination",
        }
    }

    /// Message key for the control label ("form.sourceType", ...)
    pub fn label_key(&self) -> String {
        format!("form.{}Type", self.as_str())
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static inputs of the control
#[derive(Debug, Clone)]
pub struct ControlProps {
    /// Field the selected connector id is written to
    pub field: FieldPath,
    pub form_type: FormType,
    pub is_edit_mode: bool,
    pub documentation_url: Option<String>,
    pub allow_change_connector: bool,
    /// Connector ids that must not be offered for new selections
    pub excluded_connector_ids: Vec<String>,
}

impl ControlProps {
    pub fn new(field: impl Into<FieldPath>, form_type: FormType) -> Self {
        Self {
            field: field.into(),
            form_type,
            is_edit_mode: false,
            documentation_url: None,
            allow_change_connector: false,
            excluded_connector_ids: Vec::new(),
        }
    }
}

/// Documentation block shown for the selected connector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub service_name: String,
    pub documentation_url: String,
    /// Whether the URL parses as an absolute URL
    pub is_valid_url: bool,
}

/// Maturity warning shown for alpha and beta connectors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageWarning {
    pub stage: ReleaseStage,
    pub message: String,
}

/// Everything a renderer needs to draw the control
#[derive(Debug, Clone)]
pub struct ControlView<'a> {
    pub label: String,
    pub placeholder: String,
    pub footer_label: String,
    pub options: &'a [DropDownOption],
    /// Current field value
    pub value: Option<String>,
    /// Text shown in the closed dropdown for the current value
    pub value_label: Option<String>,
    pub error: Option<String>,
    pub is_disabled: bool,
    pub is_searchable: bool,
    pub instruction: Option<Instruction>,
    pub warning: Option<StageWarning>,
}

pub type ChangeServiceTypeCallback = Box<dyn FnMut(&str)>;
pub type OpenRequestConnectorCallback = Box<dyn FnMut()>;

/// Connector dropdown bound to a form field
pub struct ServiceTypeControl {
    props: ControlProps,
    on_change_service_type: Option<ChangeServiceTypeCallback>,
    on_open_request_connector_modal: OpenRequestConnectorCallback,
    options: Memo<u64, Vec<DropDownOption>>,
    selected: Memo<(u64, Option<String>), Option<usize>>,
}

impl ServiceTypeControl {
    pub fn new(props: ControlProps, on_open_request_connector_modal: impl FnMut() + 'static) -> Self {
        Self {
            props,
            on_change_service_type: None,
            on_open_request_connector_modal: Box::new(on_open_request_connector_modal),
            options: Memo::new(),
            selected: Memo::new(),
        }
    }

    /// Register a callback invoked with the connector id after each selection
    pub fn with_change_callback(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_change_service_type = Some(Box::new(callback));
        self
    }

    pub fn props(&self) -> &ControlProps {
        &self.props
    }

    /// Switching connectors is locked while editing unless explicitly allowed
    pub fn is_disabled(&self) -> bool {
        self.props.is_edit_mode && !self.props.allow_change_connector
    }

    /// Sorted options for the catalog, recomputed only when the catalog changes
    pub fn options(&mut self, catalog: &Catalog) -> &[DropDownOption] {
        let excluded = &self.props.excluded_connector_ids;
        self.options.get_or_compute(catalog.revision(), || {
            tracing::debug!(
                revision = catalog.revision(),
                excluded = excluded.len(),
                "Rebuilding connector options"
            );
            build_options(catalog, excluded)
        })
    }

    /// Connector whose id equals the field value
    ///
    /// Excluded connectors still resolve here, so existing configurations keep
    /// working even though they cannot be newly picked.
    pub fn selected_service<'c>(
        &mut self,
        catalog: &'c Catalog,
        field: &FieldState,
    ) -> Option<&'c ConnectorDefinition> {
        let key = (catalog.revision(), field.value.clone());
        let position = *self.selected.get_or_compute(key, || {
            field
                .value
                .as_deref()
                .and_then(|value| catalog.position(value))
        });
        position.and_then(|idx| catalog.get(idx))
    }

    /// Apply a dropdown selection
    ///
    /// `None` (a cleared selection) leaves the field and callbacks untouched.
    pub fn handle_select(&mut self, item: Option<&DropDownOption>, store: &mut dyn FieldStore) {
        let Some(item) = item else {
            return;
        };

        tracing::debug!(field = %self.props.field, value = %item.value, "Connector selected");
        store.set_value(&self.props.field, item.value.clone());
        if let Some(callback) = self.on_change_service_type.as_mut() {
            callback(&item.value);
        }
    }

    /// Activate the "request a new connector" footer
    pub fn open_request_connector_modal(&mut self) {
        tracing::debug!("Request connector footer activated");
        (self.on_open_request_connector_modal)();
    }

    /// Build the render model for the current catalog and field state
    pub fn view(
        &mut self,
        catalog: &Catalog,
        store: &dyn FieldStore,
        messages: &Messages,
    ) -> ControlView<'_> {
        let field = store.field(&self.props.field);
        let selected = self.selected_service(catalog, &field);

        let instruction = match (selected, &self.props.documentation_url) {
            (Some(service), Some(url)) => Some(Instruction {
                service_name: service.name.clone(),
                documentation_url: url.clone(),
                is_valid_url: url::Url::parse(url).is_ok(),
            }),
            _ => None,
        };

        let warning = selected
            .and_then(|service| service.release_stage.as_ref())
            .filter(|stage| stage.requires_warning())
            .map(|stage| StageWarning {
                stage: stage.clone(),
                message: messages.format(&format!(
                    "connector.connectorsInDevelopment.{}",
                    stage.as_str()
                )),
            });

        let selected_name = selected.map(|service| service.name.clone());
        let is_disabled = self.is_disabled();
        let label = messages.format(&self.props.form_type.label_key());
        let options = self.options(catalog);

        // The closed dropdown shows the option label, falling back to the
        // catalog name for excluded connectors that are still selected.
        let value_label = field
            .value
            .as_deref()
            .and_then(|value| options.iter().find(|option| option.value == value))
            .map(|option| option.label.clone())
            .or(selected_name);

        ControlView {
            label,
            placeholder: messages.format("form.selectConnector"),
            footer_label: messages.format("connector.requestConnectorBlock"),
            options,
            value: field.value.clone(),
            value_label,
            error: field.visible_error().map(str::to_string),
            is_disabled,
            is_searchable: true,
            instruction,
            warning,
        }
    }
}

impl fmt::Debug for ServiceTypeControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceTypeControl")
            .field("props", &self.props)
            .field("has_change_callback", &self.on_change_service_type.is_some())
            .finish_non_exhaustive()
    }
}
