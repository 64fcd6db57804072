//! Property tests over random placement sequences.

use proptest::prelude::*;
use vanishing_tictactoe::{
    CELL_COUNT, GameEngine, InvariantSet, MAX_PIECES, Player, RoundInvariants, RoundState,
};

/// A user input: a cell click (possibly off the board) or a rematch.
#[derive(Debug, Clone, Copy)]
enum Input {
    Click(usize),
    Reset,
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        10 => (0usize..12).prop_map(Input::Click),
        1 => Just(Input::Reset),
    ]
}

fn occupancy_is_exclusive(state: &RoundState) -> bool {
    (0..CELL_COUNT).all(|cell| !(state.x_moves().contains(cell) && state.o_moves().contains(cell)))
}

proptest! {
    #[test]
    fn queues_never_exceed_three(inputs in prop::collection::vec(input(), 0..80)) {
        let mut engine = GameEngine::new();
        for input in inputs {
            match input {
                Input::Click(cell) => { engine.place_piece(cell); }
                Input::Reset => { engine.reset(); }
            }
            let state = engine.state();
            prop_assert!(state.x_moves().len() <= MAX_PIECES);
            prop_assert!(state.o_moves().len() <= MAX_PIECES);
            prop_assert!(occupancy_is_exclusive(state));
            prop_assert!(RoundInvariants::check_all(state).is_ok());
        }
    }

    #[test]
    fn ineffective_clicks_change_nothing(cells in prop::collection::vec(0usize..12, 0..60)) {
        let mut engine = GameEngine::new();
        for cell in cells {
            let before = engine.state().clone();
            let blocked = before.is_decided() || cell >= CELL_COUNT || before.piece_at(cell).is_some();
            let transition = engine.place_piece(cell);
            prop_assert_eq!(transition.rejection().is_some(), blocked);
            if blocked {
                prop_assert_eq!(engine.state(), &before);
            }
        }
    }

    #[test]
    fn turn_flips_unless_won(cells in prop::collection::vec(0usize..9, 0..60)) {
        let mut engine = GameEngine::new();
        for cell in cells {
            let mover = engine.state().current_player();
            let transition = engine.place_piece(cell);
            if transition.rejection().is_some() {
                continue;
            }
            let expected = if transition.win().is_some() { mover } else { mover.opponent() };
            prop_assert_eq!(engine.state().current_player(), expected);
        }
    }

    #[test]
    fn evicted_cell_becomes_free(cells in prop::collection::vec(0usize..9, 0..60)) {
        let mut engine = GameEngine::new();
        for cell in cells {
            let transition = engine.place_piece(cell);
            if let Some(evicted) = transition.evicted() {
                prop_assert_eq!(engine.piece_at(evicted), None);
                if !engine.state().is_decided() {
                    prop_assert!(engine.valid_cells().contains(&evicted));
                }
            }
        }
    }

    #[test]
    fn starters_strictly_alternate(resets in 1usize..20) {
        let mut engine = GameEngine::new();
        let mut previous = engine.state().current_player();
        prop_assert_eq!(previous, Player::O);
        for _ in 0..resets {
            let starter = engine.reset().current_player();
            prop_assert_eq!(starter, previous.opponent());
            previous = starter;
        }
    }

    #[test]
    fn win_matches_queue(cells in prop::collection::vec(0usize..9, 0..60)) {
        let mut engine = GameEngine::new();
        for cell in cells {
            engine.place_piece(cell);
        }
        let state = engine.state();
        if let (Some(winner), Some(line)) = (state.winner(), state.winning_line()) {
            prop_assert!(line.is_held_by(state.moves(winner)));
            prop_assert_eq!(state.moves(winner).len(), MAX_PIECES);
        }
    }
}
