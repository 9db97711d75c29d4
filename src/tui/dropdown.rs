//! Interaction state of the open dropdown
//!
//! The open dropdown shows the options matching the search query followed by
//! the "request a new connector" footer row. The footer is always the last
//! row, so an empty search result still leaves one row to activate.

/// What a dropdown row refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownRow {
    /// Index into the filtered option list
    Option(usize),
    Footer,
}

/// State for managing dropdown interaction
#[derive(Debug, Clone, Default)]
pub struct DropdownState {
    /// Whether the option list is visible
    pub open: bool,
    /// Current search text
    pub query: String,
    /// Highlighted row (options first, then the footer)
    pub highlighted: usize,
    /// Scroll offset for rendering
    pub scroll_offset: usize,
}

impl DropdownState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the list with an empty search
    pub fn open(&mut self) {
        self.open = true;
        self.query.clear();
        self.highlighted = 0;
        self.scroll_offset = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
    }

    /// Append to the search text; the highlight returns to the first match
    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.highlighted = 0;
        self.scroll_offset = 0;
    }

    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.highlighted = 0;
            self.scroll_offset = 0;
        }
    }

    /// Move highlight down; `match_count` excludes the footer row
    pub fn move_down(&mut self, match_count: usize) {
        if self.highlighted < match_count {
            self.highlighted += 1;
        }
    }

    /// Move highlight up
    pub fn move_up(&mut self) {
        if self.highlighted > 0 {
            self.highlighted -= 1;
        }
    }

    pub fn page_down(&mut self, match_count: usize, page_size: usize) {
        self.highlighted = (self.highlighted + page_size).min(match_count);
    }

    pub fn page_up(&mut self, page_size: usize) {
        self.highlighted = self.highlighted.saturating_sub(page_size);
    }

    /// Resolve the highlighted row against the current number of matches
    pub fn highlighted_row(&self, match_count: usize) -> DropdownRow {
        if self.highlighted < match_count {
            DropdownRow::Option(self.highlighted)
        } else {
            DropdownRow::Footer
        }
    }

    /// Update scroll offset to ensure the highlighted row is visible
    pub fn update_scroll(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.highlighted < self.scroll_offset {
            self.scroll_offset = self.highlighted;
        } else if self.highlighted >= self.scroll_offset + visible_height {
            self.scroll_offset = self.highlighted.saturating_sub(visible_height - 1);
        }
    }
}
