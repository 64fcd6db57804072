//! Application state and logic.

use super::input::{Action, move_cursor};
use crate::games::vanishing::{Player, Position, RoundState};
use crate::session::{Session, View};
use tracing::{debug, info};

/// Main application state.
///
/// Holds the session plus view-only state (cursor, status line). Dying
/// pieces and hover previews are derived from the round on every frame.
#[derive(Debug)]
pub struct App {
    session: Session,
    cursor: Position,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application on the menu.
    pub fn new(session: Session) -> Self {
        Self {
            session,
            cursor: Position::Center,
            status_message: String::new(),
            should_quit: false,
        }
    }

    /// The play session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the user asked to exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current player's mark previewed under the cursor, if it could go there.
    pub fn ghost(&self) -> Option<(usize, Player)> {
        let round = self.session.round()?;
        let cell = self.cursor.to_index();
        if round.is_decided() || round.piece_at(cell).is_some() {
            return None;
        }
        Some((cell, round.current_player()))
    }

    /// Applies a user action.
    pub fn handle_action(&mut self, action: Action) {
        debug!(?action, "Handling action");

        match action {
            Action::Start => {
                self.session.start_game();
                self.cursor = Position::Center;
                self.status_message.clear();
            }
            Action::MoveCursor(key) => {
                self.cursor = move_cursor(self.cursor, key);
            }
            Action::PlaceAtCursor => self.place(self.cursor.to_index()),
            Action::Place(cell) => {
                if let Some(position) = Position::from_index(cell) {
                    self.cursor = position;
                }
                self.place(cell);
            }
            Action::Rematch => {
                if let Some(round) = self.session.reset() {
                    self.status_message = format!("New round. {} opens.", round.current_player());
                }
            }
            Action::Menu => {
                self.session.back_to_menu();
                self.status_message.clear();
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Action::Ignore => {}
        }
    }

    fn place(&mut self, cell: usize) {
        let Some(transition) = self.session.place_piece(cell) else {
            return;
        };

        self.status_message = if let Some((winner, _)) = transition.win() {
            format!("Player {} wins! Press 'r' for a rematch or 'm' for the menu.", winner)
        } else if let Some(reason) = transition.rejection() {
            reason.to_string()
        } else if let Some(evicted) = transition.evicted() {
            let player = transition.placement().player;
            format!("{}'s piece on {} vanished.", player, evicted + 1)
        } else {
            String::new()
        };
    }

    /// View the session is on.
    pub fn view(&self) -> View {
        *self.session.view()
    }

    /// Current round, if playing.
    pub fn round(&self) -> Option<&RoundState> {
        self.session.round()
    }
}
