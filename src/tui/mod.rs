//! Terminal UI for vanishing tic-tac-toe.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, action_for, digit_cell, move_cursor};

use crate::config::GameConfig;
use crate::logging::init_file_logging;
use crate::session::Session;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the terminal UI until the user quits.
pub fn run_tui(config: &GameConfig) -> Result<()> {
    init_file_logging(config)?;
    info!("Starting vanishing tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut terminal = or_undo(enter_terminal, || {
        let _ = disable_raw_mode();
    })?;

    let mut app = App::new(Session::from_config(config));
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }

    res
}

/// Switches to the alternate screen and wraps stdout in a terminal.
fn enter_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    execute!(io::stdout(), EnterAlternateScreen)?;
    or_undo(
        || Ok(Terminal::new(CrosstermBackend::new(io::stdout()))?),
        || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
        },
    )
}

/// Runs `setup`, calling `undo` if it fails.
fn or_undo<T>(setup: impl FnOnce() -> Result<T>, undo: impl FnOnce()) -> Result<T> {
    setup().inspect_err(|err| {
        error!(error = ?err, "Terminal setup failed");
        undo();
    })
}

/// Event loop: draw, wait for a key, apply it.
#[instrument(skip_all)]
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            app.handle_action(action_for(app.view(), key));
        }
    }

    info!("Leaving TUI");
    Ok(())
}
