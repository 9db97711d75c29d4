//! Plain-text rendering of the control for headless use
//!
//! Mirrors what the terminal views draw, one line per element, so the CLI
//! can print option listings and selections without a terminal UI.

use crate::control::{ControlView, DropDownOption};
use crate::messages::Messages;

/// One line per option: label, connector id and the stage badge if any
pub fn option_rows(options: &[&DropDownOption], messages: &Messages) -> Vec<String> {
    options
        .iter()
        .map(|option| match option.badge_label(messages) {
            Some(badge) => format!("{} [{}] ({})", option.label, badge, option.value),
            None => format!("{} ({})", option.label, option.value),
        })
        .collect()
}

/// Describe the control's current state: value, error, instructions, warning
pub fn selection_report(view: &ControlView<'_>, messages: &Messages) -> Vec<String> {
    let mut lines = vec![format!(
        "{}: {}",
        view.label,
        view.value_label.as_deref().unwrap_or(&view.placeholder)
    )];

    if view.is_disabled {
        lines.push("  (locked while editing)".to_string());
    }

    if let Some(error) = &view.error {
        lines.push(format!("  error: {}", error));
    }

    if let Some(instruction) = &view.instruction {
        let mut line = format!(
            "{}: {} {}",
            messages.format("form.setupGuide"),
            instruction.service_name,
            instruction.documentation_url
        );
        if !instruction.is_valid_url {
            line.push_str(&format!(
                " ({})",
                messages.format("form.invalidDocumentationUrl")
            ));
        }
        lines.push(line);
    }

    if let Some(warning) = &view.warning {
        lines.push(format!(
            "{}: {}",
            warning.stage.as_str().to_uppercase(),
            warning.message
        ));
    }

    lines
}
