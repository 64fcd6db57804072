//! Key bindings: raw key events to session actions.

use crate::games::vanishing::{CELL_COUNT, Position};
use crate::session::View;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the menu and start playing.
    Start,
    /// Move the board cursor.
    MoveCursor(KeyCode),
    /// Place on the cell under the cursor.
    PlaceAtCursor,
    /// Place on a specific cell (0-8).
    Place(usize),
    /// Start a rematch.
    Rematch,
    /// Return to the menu.
    Menu,
    /// Exit the program.
    Quit,
    /// Key has no binding in this view.
    Ignore,
}

/// Maps a key event to an action for the given view.
pub fn action_for(view: View, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match view {
        View::Menu => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Action::Start,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::Ignore,
        },
        View::Playing => match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                Action::MoveCursor(key.code)
            }
            KeyCode::Enter | KeyCode::Char(' ') => Action::PlaceAtCursor,
            KeyCode::Char(c) => match digit_cell(c) {
                Some(cell) => Action::Place(cell),
                None => match c {
                    'r' => Action::Rematch,
                    'm' => Action::Menu,
                    'q' => Action::Quit,
                    _ => Action::Ignore,
                },
            },
            KeyCode::Esc => Action::Menu,
            _ => Action::Ignore,
        },
    }
}

/// Maps digit keys 1-9 to cells 0-8.
pub fn digit_cell(c: char) -> Option<usize> {
    c.to_digit(10)
        .map(|d| d as usize)
        .filter(|d| (1..=CELL_COUNT).contains(d))
        .map(|d| d - 1)
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
