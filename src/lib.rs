//! Connector picker library
//!
//! This library provides a searchable connector dropdown bound to form field
//! state: a headless core (option derivation, selection resolution, change
//! handling) plus ratatui views behind the `tui` feature.

pub mod catalog;
pub mod config;
pub mod control;
pub mod form;
pub mod messages;
pub mod report;
#[cfg(feature = "tui")]
pub mod tui;

// Re-export commonly used types for convenience
pub use catalog::{Catalog, CatalogLoader, ConnectorDefinition, ReleaseStage};
pub use control::{ControlProps, ControlView, DropDownOption, FormType, ServiceTypeControl};
pub use form::{FieldPath, FieldState, FieldStore, FormState};
pub use messages::Messages;
