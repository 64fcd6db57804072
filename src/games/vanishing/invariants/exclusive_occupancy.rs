//! Exclusive occupancy invariant: a cell belongs to at most one piece.

use super::super::{CELL_COUNT, RoundState};
use super::Invariant;

/// Invariant: the union of both queues has no duplicate and stays on the board.
pub struct ExclusiveOccupancyInvariant;

impl Invariant<RoundState> for ExclusiveOccupancyInvariant {
    fn holds(state: &RoundState) -> bool {
        let mut seen = [false; CELL_COUNT];
        for cell in state.x_moves().iter().chain(state.o_moves().iter()) {
            match seen.get_mut(cell) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }

    fn description() -> &'static str {
        "Every cell holds at most one piece"
    }
}
