//! Decided round invariant: a winner always comes with the line it holds.

use super::super::RoundState;
use super::Invariant;

/// Invariant: `winner` and `winning_line` are set together, and the winner's
/// queue holds every cell of the line.
pub struct DecidedRoundInvariant;

impl Invariant<RoundState> for DecidedRoundInvariant {
    fn holds(state: &RoundState) -> bool {
        match (state.winner(), state.winning_line()) {
            (None, None) => true,
            (Some(winner), Some(line)) => line.is_held_by(state.moves(winner)),
            _ => false,
        }
    }

    fn description() -> &'static str {
        "A winner is recorded together with the line it holds"
    }
}
