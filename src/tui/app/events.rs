//! Event handling for the application
//!
//! Keys behave differently depending on whether the dropdown is open: while
//! closed they open it or quit, while open they search, move the highlight
//! and activate rows.

use super::core::App;
use crate::control::{DropDownOption, search_options};
use crate::tui::dropdown::DropdownRow;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Outcome of activating the highlighted row
enum Activation {
    Select(DropDownOption),
    RequestConnector,
}

impl App {
    /// Main keyboard event handler
    ///
    /// Returns Some(true) to quit, None for normal continuation
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<bool> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(true);
        }

        if self.dropdown.open {
            self.handle_open_key(key);
            return None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                if self.status_message.is_some() && key.code == KeyCode::Esc {
                    self.status_message = None;
                    return None;
                }
                Some(true)
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
                if self.control.is_disabled() {
                    self.status_message = Some((
                        "The connector cannot be changed while editing".to_string(),
                        true,
                    ));
                } else {
                    self.status_message = None;
                    self.dropdown.open();
                }
                None
            }
            _ => None,
        }
    }

    fn handle_open_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.dropdown.close(),
            KeyCode::Enter => self.activate_highlighted(),
            KeyCode::Up => self.dropdown.move_up(),
            KeyCode::Down => {
                let count = self.match_count();
                self.dropdown.move_down(count);
            }
            KeyCode::PageUp => self.dropdown.page_up(self.page_size),
            KeyCode::PageDown => {
                let count = self.match_count();
                self.dropdown.page_down(count, self.page_size);
            }
            KeyCode::Backspace => self.dropdown.pop_char(),
            KeyCode::Char(c) => self.dropdown.push_char(c),
            _ => {}
        }
    }

    /// Number of options matching the current search
    fn match_count(&mut self) -> usize {
        let options = self.control.options(&self.catalog);
        search_options(options, &self.dropdown.query).len()
    }

    fn activate_highlighted(&mut self) {
        let activation = {
            let options = self.control.options(&self.catalog);
            let matches = search_options(options, &self.dropdown.query);
            match self.dropdown.highlighted_row(matches.len()) {
                DropdownRow::Option(idx) => Activation::Select(matches[idx].clone()),
                DropdownRow::Footer => Activation::RequestConnector,
            }
        };

        match activation {
            Activation::Select(option) => {
                self.control.handle_select(Some(&option), &mut self.form);
            }
            Activation::RequestConnector => {
                self.last_request = Some(self.dropdown.query.clone());
                self.control.open_request_connector_modal();
            }
        }
        self.dropdown.close();
        self.process_events();
    }
}
