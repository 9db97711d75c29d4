//! Theme and styling definitions
//!
//! This module provides a centralized place for all color and style definitions
//! used by the connector control views.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_label: Color,

    // Dropdown colors
    pub border: Color,
    pub border_focus: Color,
    pub border_disabled: Color,
    pub option_selected: Color,
    pub option_selected_bg: Color,
    pub option_current: Color,

    // Release stage badge
    pub badge_fg: Color,
    pub badge_bg: Color,

    // Blocks below the dropdown
    pub link: Color,
    pub error: Color,
    pub warning: Color,

    // Footer colors
    pub footer_key: Color,
    pub footer_action: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Text colors
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_label: Color::Cyan,

            // Dropdown colors
            border: Color::Gray,
            border_focus: Color::Blue,
            border_disabled: Color::DarkGray,
            option_selected: Color::Blue,
            option_selected_bg: Color::DarkGray,
            option_current: Color::Green,

            // Release stage badge
            badge_fg: Color::White,
            badge_bg: Color::DarkGray,

            // Blocks below the dropdown
            link: Color::Cyan,
            error: Color::Red,
            warning: Color::Yellow,

            // Footer colors
            footer_key: Color::Yellow,
            footer_action: Color::Magenta,
        }
    }
}

impl Theme {
    // Helper methods for common style combinations

    pub fn label_style(&self) -> Style {
        Style::default()
            .fg(self.text_label)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self, focused: bool, disabled: bool, has_error: bool) -> Style {
        let color = if has_error {
            self.error
        } else if disabled {
            self.border_disabled
        } else if focused {
            self.border_focus
        } else {
            self.border
        };
        Style::default().fg(color)
    }

    pub fn option_selected_style(&self) -> Style {
        Style::default()
            .fg(self.option_selected)
            .bg(self.option_selected_bg)
    }

    pub fn badge_style(&self) -> Style {
        Style::default()
            .fg(self.badge_fg)
            .bg(self.badge_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn placeholder_style(&self) -> Style {
        Style::default()
            .fg(self.text_secondary)
            .add_modifier(Modifier::DIM)
    }

    pub fn disabled_style(&self) -> Style {
        Style::default()
            .fg(self.border_disabled)
            .add_modifier(Modifier::DIM)
    }

    pub fn link_style(&self) -> Style {
        Style::default()
            .fg(self.link)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    pub fn warning_style(&self) -> Style {
        Style::default()
            .fg(self.warning)
            .add_modifier(Modifier::BOLD)
    }

    pub fn footer_key_style(&self) -> Style {
        Style::default().fg(self.footer_key)
    }

    pub fn footer_action_style(&self) -> Style {
        Style::default().fg(self.footer_action)
    }
}
