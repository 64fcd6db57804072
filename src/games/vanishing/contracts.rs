//! Contract-based validation for vanishing tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} placement {Q}. A failed precondition means the placement is ignored;
//! a failed postcondition means the engine has a bug.

use super::action::{Placement, Rejection};
use super::invariants::{InvariantSet, InvariantViolation, RoundInvariants};
use super::state::RoundState;
use super::types::CELL_COUNT;
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the round has no winner yet.
pub struct RoundUndecided;

impl RoundUndecided {
    /// Rejects placements on a decided round.
    pub fn check(state: &RoundState) -> Result<(), Rejection> {
        if state.is_decided() {
            Err(Rejection::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the cell is on the board.
pub struct CellOnBoard;

impl CellOnBoard {
    /// Rejects indices outside 0-8.
    pub fn check(placement: &Placement) -> Result<(), Rejection> {
        if placement.cell < CELL_COUNT {
            Ok(())
        } else {
            Err(Rejection::OutOfRange(placement.cell))
        }
    }
}

/// Precondition: neither player holds the cell.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects occupied cells.
    pub fn check(placement: &Placement, state: &RoundState) -> Result<(), Rejection> {
        match state.piece_at(placement.cell) {
            Some(_) => Err(Rejection::CellOccupied(placement.cell)),
            None => Ok(()),
        }
    }
}

/// Contract for placements.
///
/// Preconditions:
/// - Round is undecided
/// - Cell is on the board
/// - Cell is empty
///
/// Postconditions:
/// - All [`RoundInvariants`] hold
/// - Exactly one piece was added to the mover's queue
/// - The turn passed to the opponent, unless the placement won
pub struct PlacementContract;

impl Contract<RoundState, Placement> for PlacementContract {
    #[instrument(skip(state))]
    fn pre(state: &RoundState, placement: &Placement) -> Result<(), Rejection> {
        RoundUndecided::check(state)?;
        CellOnBoard::check(placement)?;
        CellIsEmpty::check(placement, state)?;
        Ok(())
    }

    fn post(before: &RoundState, after: &RoundState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match RoundInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        let mover = before.current_player();
        let grew_by_one = after.moves(mover).len()
            == (before.moves(mover).len() + 1).min(super::MAX_PIECES);
        let opponent_untouched = after.moves(mover.opponent()) == before.moves(mover.opponent());
        if !grew_by_one || !opponent_untouched {
            violations.push(InvariantViolation::new(
                "A placement adds exactly one piece for the mover",
            ));
        }

        let expected_turn = if after.is_decided() {
            mover
        } else {
            mover.opponent()
        };
        if after.current_player() != expected_turn {
            violations.push(InvariantViolation::new(
                "Turn passes to the opponent unless the placement wins",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::vanishing::{MoveQueue, Player};

    #[test]
    fn test_precondition_empty_cell() {
        let state = RoundState::new(Player::O);
        let placement = Placement::new(Player::O, 4);
        assert!(PlacementContract::pre(&state, &placement).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let state = RoundState::new(Player::O).place(4).into_state();
        let placement = Placement::new(Player::X, 4);
        assert_eq!(
            PlacementContract::pre(&state, &placement),
            Err(Rejection::CellOccupied(4))
        );
    }

    #[test]
    fn test_precondition_checks_decided_first() {
        let x: MoveQueue = [0, 1, 2].into_iter().collect();
        let line = crate::games::vanishing::WIN_LINES[0];
        let state = RoundState::from_parts(x, MoveQueue::new(), Player::X, Some(Player::X), Some(line));
        // Off the board and decided: the decided round wins.
        let placement = Placement::new(Player::X, 42);
        assert_eq!(
            PlacementContract::pre(&state, &placement),
            Err(Rejection::GameOver)
        );
    }

    #[test]
    fn test_postcondition_holds_after_placement() {
        let before = RoundState::new(Player::O);
        let after = before.place(4).into_state();
        assert!(PlacementContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_missing_turn_flip() {
        let before = RoundState::new(Player::O);
        let o: MoveQueue = [4].into_iter().collect();
        let after = RoundState::from_parts(MoveQueue::new(), o, Player::O, None, None);
        assert!(PlacementContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = RoundState::new(Player::O);
        let x: MoveQueue = [0].into_iter().collect();
        let o: MoveQueue = [4].into_iter().collect();
        let after = RoundState::from_parts(x, o, Player::X, None, None);
        assert!(PlacementContract::post(&before, &after).is_err());
    }
}
