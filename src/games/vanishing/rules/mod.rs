//! Game rules for vanishing tic-tac-toe.
//!
//! Pure functions over move queues. Rules are kept apart from the round
//! state so contracts and tests can use them directly.

pub mod win;

pub use win::{WIN_LINES, WinLine, winning_line};
