//! TUI for the autofocus review session.
//!
//! One task at a time, no list in sight: the queue engine decides what is
//! current, the TUI renders it and maps keys to session messages.

mod app;
mod event;
mod ui;

use std::io;
use std::time::Duration;

use chrono::NaiveDate;
use color_eyre::eyre::Result;
use crossterm::{
    event::{poll, read, Event},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use ratatui::prelude::*;

use dayboard_core::autofocus::{AutofocusSession, SessionStats};
use dayboard_core::journal::JournalService;

use crate::store::TaskStore;

use app::App;
use event::map_key_event;

/// Run the review TUI over an already-started session.
///
/// Returns the final session stats after the user exits.
pub fn run(
    session: AutofocusSession,
    store: TaskStore,
    journal: Option<JournalService>,
    today: NaiveDate,
) -> Result<SessionStats> {
    let app = App::new(session, store, journal, today);

    let mut terminal = setup_terminal()?;

    // Run with cleanup on panic
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        run_app(&mut terminal, app)
    }));

    // Always restore terminal
    restore_terminal(&mut terminal)?;

    match result {
        Ok(Ok(stats)) => Ok(stats),
        Ok(Err(e)) => Err(e),
        Err(_) => Err(color_eyre::eyre::eyre!("Application panicked")),
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<SessionStats> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if poll(Duration::from_millis(100))? {
            if let Event::Key(key) = read()? {
                if let Some(msg) = map_key_event(&app, key) {
                    app.update(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(app.finish());
        }
    }
}
