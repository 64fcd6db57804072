//! First-class placement actions and the reasons a placement is ignored.

use super::types::Player;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A placement: a player putting a piece on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Placement {
    /// The player placing the piece.
    pub player: Player,
    /// The target cell (0-8).
    pub cell: usize,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.cell)
    }
}

/// Why a placement was ignored.
///
/// Ignored placements are not errors: the engine returns the round
/// unchanged. The reason is kept for logging and for callers that want
/// to give feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The round already has a winner.
    #[display("Round is already decided")]
    GameOver,

    /// The cell holds a piece of either player.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The cell index is not on the board.
    #[display("Cell {} is off the board (must be 0-8)", _0)]
    OutOfRange(usize),
}
