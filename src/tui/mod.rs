//! Terminal User Interface (TUI) for psysafe.
//!
//! A full-screen breathing exercise built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, ScreenSink};

use std::io;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::debug;

use crate::error::PsySafeError;

/// Options for the breathing screen.
#[derive(Debug, Clone)]
pub struct BreatheOptions {
    /// Technique to highlight.
    pub technique: String,
    /// Start the technique right away.
    pub autostart: bool,
    /// Spacing of timer updates.
    pub tick_interval: Duration,
    /// Stop the session after this long.
    pub limit: Option<Duration>,
    /// Draw the elapsed timer.
    pub show_elapsed: bool,
}

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(options: &BreatheOptions) -> Result<(), PsySafeError> {
    // Validate before touching the terminal
    let mut app = App::new(&options.technique, options.tick_interval, options.limit)?;
    app.show_elapsed = options.show_elapsed;
    if options.autostart {
        app.toggle()?;
    }

    enable_raw_mode()
        .map_err(|e| PsySafeError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| PsySafeError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| PsySafeError::Terminal(format!("Failed to create terminal: {e}")))?;

    let result = run_app(&mut terminal, &mut app);
    app.dispose();

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), PsySafeError> {
    loop {
        app.tick();

        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| PsySafeError::Terminal(format!("Failed to draw: {e}")))?;

        if let Some(action) = event::handle_events(app)? {
            debug!(?action, "key action");
            match action {
                event::Action::Quit => break,
                event::Action::Toggle => app.toggle()?,
                event::Action::Select(index) => app.select(index)?,
                event::Action::Next => app.select_next()?,
            }
        }
    }

    Ok(())
}
