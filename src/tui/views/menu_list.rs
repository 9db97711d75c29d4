//! Open dropdown list with the "request a new connector" footer

use super::option::{OptionFlags, render_option};
use crate::control::DropDownOption;
use crate::messages::Messages;
use crate::tui::dropdown::{DropdownRow, DropdownState};
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

/// Height needed to show `match_count` options (capped) plus the footer
pub fn menu_list_height(match_count: usize, max_rows: usize) -> u16 {
    // rows + top/bottom border + footer separator + footer line
    let rows = match_count.clamp(1, max_rows.max(1));
    (rows as u16).saturating_add(4)
}

/// Render the matching options unchanged, followed by the footer row
#[allow(clippy::too_many_arguments)]
pub fn render_menu_list(
    f: &mut Frame,
    area: Rect,
    matches: &[&DropDownOption],
    current_value: Option<&str>,
    footer_label: &str,
    dropdown: &mut DropdownState,
    messages: &Messages,
    theme: &Theme,
    show_icons: bool,
) {
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(true, false, false));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Options
            Constraint::Length(2), // Footer (separator + action)
        ])
        .split(inner);

    let list_height = chunks[0].height as usize;
    let highlighted = dropdown.highlighted_row(matches.len());
    if let DropdownRow::Option(_) = highlighted {
        dropdown.update_scroll(list_height);
    }

    let items: Vec<ListItem> = if matches.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            format!("  {}", messages.format("form.noMatches")),
            theme.placeholder_style(),
        )))]
    } else {
        matches
            .iter()
            .enumerate()
            .skip(dropdown.scroll_offset)
            .take(list_height)
            .map(|(idx, option)| {
                let flags = OptionFlags {
                    is_selected: current_value == Some(option.value.as_str()),
                    is_focused: highlighted == DropdownRow::Option(idx),
                    is_disabled: false,
                };
                ListItem::new(render_option(option, flags, messages, theme, show_icons))
            })
            .collect()
    };

    f.render_widget(
        List::new(items).style(Style::default().fg(theme.text_primary)),
        chunks[0],
    );

    render_request_connector_footer(
        f,
        chunks[1],
        footer_label,
        highlighted == DropdownRow::Footer,
        theme,
    );
}

/// Footer action beneath the option list
pub fn render_request_connector_footer(
    f: &mut Frame,
    area: Rect,
    label: &str,
    is_focused: bool,
    theme: &Theme,
) {
    let style = if is_focused {
        theme.option_selected_style().add_modifier(Modifier::BOLD)
    } else {
        theme.footer_action_style()
    };
    let prefix = if is_focused { "> " } else { "  " };

    let footer = Paragraph::new(Line::from(Span::styled(format!("{}{}", prefix, label), style)))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.border)),
        );
    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_list_height() {
        assert_eq!(menu_list_height(0, 8), 5);
        assert_eq!(menu_list_height(3, 8), 7);
        assert_eq!(menu_list_height(50, 8), 12);
    }
}
