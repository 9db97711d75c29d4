//! Application state and main TUI logic

use crate::catalog::Catalog;
use crate::config::UiConfig;
use crate::control::{ControlProps, ServiceTypeControl};
use crate::form::{FieldStore, FormState};
use crate::messages::Messages;
use crate::tui::Theme;
use crate::tui::dropdown::DropdownState;
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

/// Events raised by the control's callbacks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A connector was picked; carries the connector id
    ServiceTypeChanged(String),
    /// The "request a new connector" footer was activated
    RequestConnector,
}

/// Main application state
pub struct App {
    // Core data
    pub(crate) catalog: Catalog,
    pub(crate) form: FormState,
    pub(crate) control: ServiceTypeControl,
    pub(crate) messages: Messages,
    pub(crate) theme: Theme,

    // Interaction
    pub(crate) dropdown: DropdownState,
    /// Status message to display (message, is_error)
    pub(crate) status_message: Option<(String, bool)>,
    pub(crate) event_rx: UnboundedReceiver<AppEvent>,
    pub(crate) last_request: Option<String>,

    // UI settings
    pub(crate) show_icons: bool,
    pub(crate) page_size: usize,
}

impl App {
    pub fn new(
        catalog: Catalog,
        props: ControlProps,
        initial_value: Option<String>,
        messages: Messages,
        theme: Theme,
        ui: &UiConfig,
    ) -> Self {
        let (event_tx, event_rx) = unbounded_channel();

        let mut form = FormState::new();
        if let Some(value) = initial_value {
            form.set_value(&props.field, value);
            // A preset value should not surface validation errors yet
            form.set_touched(&props.field, false);
        }

        let change_tx = event_tx.clone();
        let control = ServiceTypeControl::new(props, move || {
            let _ = event_tx.send(AppEvent::RequestConnector);
        })
        .with_change_callback(move |id| {
            let _ = change_tx.send(AppEvent::ServiceTypeChanged(id.to_string()));
        });

        Self {
            catalog,
            form,
            control,
            messages,
            theme,
            dropdown: DropdownState::new(),
            status_message: None,
            event_rx,
            last_request: None,
            show_icons: !ui.no_icons,
            page_size: ui.page_size.max(1),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Replace the catalog; derived options are rebuilt on next render
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn dropdown(&self) -> &DropdownState {
        &self.dropdown
    }

    pub fn control(&self) -> &ServiceTypeControl {
        &self.control
    }

    pub fn status_message(&self) -> Option<&(String, bool)> {
        self.status_message.as_ref()
    }

    pub fn set_status_message(&mut self, message: (String, bool)) {
        self.status_message = Some(message);
    }

    /// Current value of the bound field
    pub fn selected_value(&self) -> Option<String> {
        self.form.field(&self.control.props().field).value
    }

    /// Search text of the last connector request, if the footer was activated
    pub fn last_request(&self) -> Option<&str> {
        self.last_request.as_deref()
    }

    /// Drain events raised by the control's callbacks
    ///
    /// Returns the number of events processed.
    pub fn process_events(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            processed += 1;
            match event {
                AppEvent::ServiceTypeChanged(id) => {
                    let name = self
                        .catalog
                        .find(&id)
                        .map(|def| def.name.clone())
                        .unwrap_or_else(|| id.clone());
                    tracing::info!("Service type changed to {} ({})", name, id);
                    self.status_message = Some((format!("Selected {}", name), false));
                }
                AppEvent::RequestConnector => {
                    tracing::info!("Connector request requested");
                    self.status_message = Some((
                        "Request a new connector: describe it in the request form".to_string(),
                        false,
                    ));
                }
            }
        }
        processed
    }
}
