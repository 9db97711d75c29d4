//! Form field state
//!
//! The connector control does not own its value. It reads the bound field's
//! value, error and touched flag through [`FieldStore`] and writes selections
//! back through it. [`FormState`] is a simple in-memory store used by the
//! terminal app and the headless commands.

use std::collections::HashMap;
use std::fmt;

/// Dot-separated path to a field inside the form (e.g. "serviceType")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// Snapshot of a single field's state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: Option<String>,
    pub error: Option<String>,
    pub touched: bool,
}

impl FieldState {
    /// Error to display; validation errors only surface once the field is touched
    pub fn visible_error(&self) -> Option<&str> {
        if self.touched {
            self.error.as_deref()
        } else {
            None
        }
    }
}

/// Access to externally owned field state
#[cfg_attr(test, mockall::automock)]
pub trait FieldStore {
    /// Read the current state of a field
    fn field(&self, path: &FieldPath) -> FieldState;

    /// Write a new value into a field
    fn set_value(&mut self, path: &FieldPath, value: String);
}

/// In-memory field store
#[derive(Debug, Default, Clone)]
pub struct FormState {
    fields: HashMap<FieldPath, FieldState>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a validation error on a field
    pub fn set_error(&mut self, path: &FieldPath, error: Option<String>) {
        self.fields.entry(path.clone()).or_default().error = error;
    }

    /// Mark a field as touched (the user has interacted with it)
    pub fn set_touched(&mut self, path: &FieldPath, touched: bool) {
        self.fields.entry(path.clone()).or_default().touched = touched;
    }
}

impl FieldStore for FormState {
    fn field(&self, path: &FieldPath) -> FieldState {
        self.fields.get(path).cloned().unwrap_or_default()
    }

    fn set_value(&mut self, path: &FieldPath, value: String) {
        tracing::trace!(field = %path, value = %value, "Field value set");
        let field = self.fields.entry(path.clone()).or_default();
        field.value = Some(value);
        field.touched = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_is_empty() {
        let form = FormState::new();
        assert_eq!(form.field(&"serviceType".into()), FieldState::default());
    }

    #[test]
    fn test_set_value_marks_touched() {
        let mut form = FormState::new();
        let path = FieldPath::new("serviceType");
        form.set_value(&path, "abc".to_string());
        let state = form.field(&path);
        assert_eq!(state.value.as_deref(), Some("abc"));
        assert!(state.touched);
    }

    #[test]
    fn test_error_hidden_until_touched() {
        let mut form = FormState::new();
        let path = FieldPath::new("serviceType");
        form.set_error(&path, Some("required".to_string()));
        assert_eq!(form.field(&path).visible_error(), None);

        form.set_touched(&path, true);
        assert_eq!(form.field(&path).visible_error(), Some("required"));
    }
}
