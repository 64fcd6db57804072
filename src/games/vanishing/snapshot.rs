//! Flat, serializable picture of a round for presentation layers.

use super::rules::WinLine;
use super::state::RoundState;
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Everything a renderer needs about a round, in one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    /// Board view.
    pub board: Board,
    /// Player to move (the winner once decided).
    pub current_player: Player,
    /// Winner, if decided.
    pub winner: Option<Player>,
    /// Completed line, if decided.
    pub winning_line: Option<WinLine>,
    /// X's pieces, oldest first.
    pub x_moves: Vec<usize>,
    /// O's pieces, oldest first.
    pub o_moves: Vec<usize>,
    /// The mover's piece that vanishes on their next placement.
    pub dying_piece: Option<usize>,
}

impl From<&RoundState> for RoundSnapshot {
    fn from(state: &RoundState) -> Self {
        Self {
            board: state.board(),
            current_player: state.current_player(),
            winner: state.winner(),
            winning_line: state.winning_line(),
            x_moves: state.x_moves().to_vec(),
            o_moves: state.o_moves().to_vec(),
            dying_piece: state.dying_piece(),
        }
    }
}
