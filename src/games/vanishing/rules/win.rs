//! Win detection for vanishing tic-tac-toe.

use super::super::move_queue::MoveQueue;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the 8 winning patterns, as three cell indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([usize; 3]);

impl WinLine {
    /// The three cells of the line.
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    /// Returns true if the cell lies on this line.
    pub fn contains(&self, cell: usize) -> bool {
        self.0.contains(&cell)
    }

    /// Returns true if every cell of the line is in the queue.
    pub fn is_held_by(&self, queue: &MoveQueue) -> bool {
        self.0.iter().all(|&cell| queue.contains(cell))
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

/// Winning patterns in canonical order: rows, columns, diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([0, 1, 2]),
    WinLine([3, 4, 5]),
    WinLine([6, 7, 8]),
    // Columns
    WinLine([0, 3, 6]),
    WinLine([1, 4, 7]),
    WinLine([2, 5, 8]),
    // Diagonals
    WinLine([0, 4, 8]),
    WinLine([2, 4, 6]),
];

/// Returns the first line (in canonical order) fully held by the queue.
///
/// Membership only: placement order inside the queue does not matter.
#[instrument(skip(queue), fields(cells = ?queue.to_vec()))]
pub fn winning_line(queue: &MoveQueue) -> Option<WinLine> {
    WIN_LINES.into_iter().find(|line| line.is_held_by(queue))
}
