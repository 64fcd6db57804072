//! Queue capacity invariant: nobody holds more than three pieces.

use super::super::{MAX_PIECES, RoundState};
use super::Invariant;

/// Invariant: each player's move queue holds at most [`MAX_PIECES`] cells.
pub struct QueueCapacityInvariant;

impl Invariant<RoundState> for QueueCapacityInvariant {
    fn holds(state: &RoundState) -> bool {
        state.x_moves().len() <= MAX_PIECES && state.o_moves().len() <= MAX_PIECES
    }

    fn description() -> &'static str {
        "Each player has at most three pieces on the board"
    }
}
