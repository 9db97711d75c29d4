//! Connector service-type control rendering
//!
//! Draws the labeled dropdown, the open option list, the validation error,
//! the setup-guide block and the release-stage warning, top to bottom.

use super::menu_list::{menu_list_height, render_menu_list};
use crate::control::{ControlView, Instruction, StageWarning, search_options};
use crate::messages::Messages;
use crate::tui::dropdown::DropdownState;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Maximum option rows shown at once in the open list
pub const MAX_VISIBLE_OPTIONS: usize = 8;

/// Render the whole control into `area`
pub fn render_service_type_control(
    f: &mut Frame,
    area: Rect,
    view: &ControlView<'_>,
    dropdown: &mut DropdownState,
    messages: &Messages,
    theme: &Theme,
    show_icons: bool,
) {
    let query = if view.is_searchable { dropdown.query.as_str() } else { "" };
    let matches = search_options(view.options, query);
    let is_open = dropdown.open && !view.is_disabled;

    let mut constraints = vec![
        Constraint::Length(1), // Label
        Constraint::Length(3), // Dropdown box
    ];
    if view.error.is_some() {
        constraints.push(Constraint::Length(1));
    }
    if is_open {
        constraints.push(Constraint::Length(menu_list_height(
            matches.len(),
            MAX_VISIBLE_OPTIONS,
        )));
    }
    if view.instruction.is_some() {
        constraints.push(Constraint::Length(3));
    }
    if view.warning.is_some() {
        constraints.push(Constraint::Length(4));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    let mut next = 0;
    let mut take = || {
        let chunk = chunks[next];
        next += 1;
        chunk
    };

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(view.label.clone(), theme.label_style()))),
        take(),
    );

    render_dropdown_box(f, take(), view, dropdown, is_open, theme);

    if let Some(error) = &view.error {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(error.clone(), theme.error_style()))),
            take(),
        );
    }

    if is_open {
        render_menu_list(
            f,
            take(),
            &matches,
            view.value.as_deref(),
            &view.footer_label,
            dropdown,
            messages,
            theme,
            show_icons,
        );
    }

    if let Some(instruction) = &view.instruction {
        render_instruction(f, take(), instruction, messages, theme);
    }

    if let Some(warning) = &view.warning {
        render_stage_warning(f, take(), warning, theme);
    }
}

fn render_dropdown_box(
    f: &mut Frame,
    area: Rect,
    view: &ControlView<'_>,
    dropdown: &DropdownState,
    is_open: bool,
    theme: &Theme,
) {
    let content = if view.is_disabled {
        let text = view
            .value_label
            .clone()
            .unwrap_or_else(|| view.placeholder.clone());
        Line::from(Span::styled(text, theme.disabled_style()))
    } else if is_open && view.is_searchable {
        if dropdown.query.is_empty() {
            Line::from(vec![
                Span::styled(view.placeholder.clone(), theme.placeholder_style()),
                Span::raw("_"),
            ])
        } else {
            Line::from(vec![
                Span::styled(dropdown.query.clone(), Style::default().fg(theme.text_primary)),
                Span::raw("_"), // Cursor
            ])
        }
    } else {
        match &view.value_label {
            Some(label) => Line::from(Span::styled(
                label.clone(),
                Style::default().fg(theme.text_primary),
            )),
            None => Line::from(Span::styled(
                view.placeholder.clone(),
                theme.placeholder_style(),
            )),
        }
    };

    let indicator = if view.is_disabled {
        ""
    } else if is_open {
        " ▲ "
    } else {
        " ▼ "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(is_open, view.is_disabled, view.error.is_some()))
        .title_bottom(Line::from(indicator).right_aligned());

    f.render_widget(Paragraph::new(content).block(block), area);
}

/// Setup-guide block for the selected connector
pub fn render_instruction(
    f: &mut Frame,
    area: Rect,
    instruction: &Instruction,
    messages: &Messages,
    theme: &Theme,
) {
    let mut spans = vec![
        Span::styled(
            format!("{}: ", instruction.service_name),
            Style::default().fg(theme.text_secondary),
        ),
        Span::styled(instruction.documentation_url.clone(), theme.link_style()),
    ];
    if !instruction.is_valid_url {
        spans.push(Span::styled(
            format!(" ({})", messages.format("form.invalidDocumentationUrl")),
            theme.warning_style(),
        ));
    }

    let block = Block::default()
        .title(messages.format("form.setupGuide"))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.text_label));
    f.render_widget(
        Paragraph::new(Line::from(spans))
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// Maturity warning for alpha and beta connectors
pub fn render_stage_warning(f: &mut Frame, area: Rect, warning: &StageWarning, theme: &Theme) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", warning.stage.as_str().to_uppercase()),
            theme.warning_style(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.warning));
    f.render_widget(
        Paragraph::new(warning.message.clone())
            .style(Style::default().fg(theme.text_primary))
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}
