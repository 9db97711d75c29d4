//! Rendering logic for the application

use super::core::App;
use crate::tui::views::render_service_type_control;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

impl App {
    /// Main render entry point
    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),    // Control
                Constraint::Length(3), // Footer
            ])
            .split(f.area());

        let view = self.control.view(&self.catalog, &self.form, &self.messages);
        render_service_type_control(
            f,
            chunks[0],
            &view,
            &mut self.dropdown,
            &self.messages,
            &self.theme,
            self.show_icons,
        );

        self.render_footer(f, chunks[1]);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let line = match &self.status_message {
            Some((msg, is_error)) => Line::from(Span::styled(
                msg.clone(),
                if *is_error {
                    self.theme.error_style()
                } else {
                    self.theme.warning_style()
                },
            )),
            None => {
                let hints: &[(&str, &str)] = if self.dropdown.open {
                    &[
                        ("↑/↓", "Navigate"),
                        ("type", "Search"),
                        ("Enter", "Select"),
                        ("Esc", "Close"),
                    ]
                } else {
                    &[("Enter", "Open"), ("q", "Quit")]
                };
                let mut spans = Vec::new();
                for (key, label) in hints {
                    spans.push(Span::styled(format!("<{}>", key), self.theme.footer_key_style()));
                    spans.push(Span::raw(format!(" {}  ", label)));
                }
                Line::from(spans)
            }
        };

        f.render_widget(
            Paragraph::new(line).block(Block::default().borders(Borders::ALL)),
            area,
        );
    }
}
