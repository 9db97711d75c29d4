//! TUI module
//!
//! Provides the terminal user interface for the connector picker.
//! Built with ratatui.

mod app;
pub mod dropdown;
mod theme;
pub mod views;

pub use app::*;
pub use theme::*;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Run the TUI application
///
/// Returns the final value of the bound field once the user quits.
pub async fn run_tui(mut app: App, enable_mouse: bool) -> Result<Option<String>> {
    tracing::debug!("Initializing TUI");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if enable_mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::debug!("TUI initialized, entering main loop");

    let result = event_loop(&mut terminal, &mut app).await;

    tracing::debug!("TUI shutting down");

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if enable_mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    result?;
    Ok(app.selected_value())
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        // Handle input events (non-blocking)
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(true) = app.handle_key(key) {
                        break;
                    }
                }
            }
        }

        // Events raised by control callbacks outside of key handling
        if app.process_events() > 0 {
            terminal.draw(|f| app.render(f))?;
        }

        tokio::task::yield_now().await;
    }

    Ok(())
}
