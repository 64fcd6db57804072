//! Tests for the vanishing tic-tac-toe engine.

use vanishing_tictactoe::{GameEngine, PlaceOutcome, Player, Rejection, RoundEvent, Square};

fn engine_with(cells: &[usize]) -> GameEngine {
    let mut engine = GameEngine::new();
    for &cell in cells {
        engine.place_piece(cell);
    }
    engine
}

#[test]
fn test_scenario_no_false_win_and_eviction() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.state().current_player(), Player::O);

    // O 4, X 0, O 8, X 1: no line yet for anyone.
    for cell in [4, 0, 8, 1] {
        let transition = engine.place_piece(cell);
        assert_eq!(transition.win(), None);
    }

    // O 5: O holds 4, 8, 5 - still no line.
    let transition = engine.place_piece(5);
    assert_eq!(transition.outcome(), PlaceOutcome::Placed { evicted: None });
    assert_eq!(engine.next_to_vanish(Player::O), Some(4));

    // X 6: X holds 0, 1, 6.
    engine.place_piece(6);
    assert_eq!(engine.dying_piece(), Some(4));

    // O 3: fourth O piece evicts the centre before any win.
    let transition = engine.place_piece(3);
    assert_eq!(transition.evicted(), Some(4));
    assert_eq!(transition.win(), None);
    assert_eq!(engine.piece_at(4), None);
    assert_eq!(engine.state().o_moves().to_vec(), vec![8, 5, 3]);

    // The freed centre can be taken by the opponent.
    let transition = engine.place_piece(4);
    assert!(transition.rejection().is_none());
    assert_eq!(engine.piece_at(4), Some(Player::X));
}

#[test]
fn test_completing_a_line_after_eviction_wins() {
    // O 4, X 0, O 8, X 1, O 5, X 6, O 2 -> O holds 8, 5, 2: right column.
    let mut engine = engine_with(&[4, 0, 8, 1, 5, 6]);
    let transition = engine.place_piece(2);
    assert_eq!(transition.evicted(), Some(4));
    let (winner, line) = transition.win().expect("right column");
    assert_eq!(winner, Player::O);
    assert_eq!(line.cells(), [2, 5, 8]);
}

#[test]
fn test_top_row_win() {
    let mut engine = GameEngine::with_first_player(Player::X);
    for cell in [0, 3, 1, 4] {
        engine.place_piece(cell);
    }
    engine.place_piece(2);

    let state = engine.state();
    assert_eq!(state.winner(), Some(Player::X));
    assert_eq!(state.winning_line().map(|l| l.cells()), Some([0, 1, 2]));
    assert_eq!(state.current_player(), Player::X);
}

#[test]
fn test_diagonal_win() {
    let mut engine = GameEngine::with_first_player(Player::X);
    for cell in [0, 1, 4, 2] {
        engine.place_piece(cell);
    }
    let transition = engine.place_piece(8);
    assert_eq!(transition.win().map(|(p, l)| (p, l.cells())), Some((Player::X, [0, 4, 8])));
}

#[test]
fn test_occupied_cell_leaves_state_equal() {
    let mut engine = engine_with(&[4, 0]);
    let before = engine.state().clone();

    for cell in [4, 0] {
        let transition = engine.place_piece(cell);
        assert_eq!(transition.rejection(), Some(Rejection::CellOccupied(cell)));
        assert_eq!(transition.state(), &before);
        assert_eq!(engine.state(), &before);
    }
}

#[test]
fn test_out_of_range_leaves_state_equal() {
    let mut engine = engine_with(&[4]);
    let before = engine.state().clone();
    let transition = engine.place_piece(usize::MAX);
    assert_eq!(transition.rejection(), Some(Rejection::OutOfRange(usize::MAX)));
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_placement_after_win_leaves_state_equal() {
    let mut engine = engine_with(&[3, 0, 4, 1, 8, 2]);
    let before = engine.state().clone();
    assert_eq!(before.winner(), Some(Player::X));

    let transition = engine.place_piece(5);
    assert_eq!(transition.rejection(), Some(Rejection::GameOver));
    assert_eq!(engine.state(), &before);
    assert_eq!(engine.dying_piece(), None);
    assert!(engine.valid_cells().is_empty());
}

#[test]
fn test_reset_alternates_regardless_of_winner() {
    let mut engine = GameEngine::new();
    let mut starters = vec![engine.state().current_player()];

    // O's round: X wins.
    for cell in [3, 0, 4, 1, 8, 2] {
        engine.place_piece(cell);
    }
    starters.push(engine.reset().current_player());

    // X's round: X wins again.
    for cell in [0, 3, 1, 4, 2] {
        engine.place_piece(cell);
    }
    assert_eq!(engine.state().winner(), Some(Player::X));
    starters.push(engine.reset().current_player());

    // Undecided round.
    engine.place_piece(4);
    starters.push(engine.reset().current_player());

    assert_eq!(starters, vec![Player::O, Player::X, Player::O, Player::X]);
}

#[test]
fn test_board_view_matches_queues() {
    let engine = engine_with(&[4, 0, 8]);
    let board = engine.state().board();
    assert_eq!(board.get(4), Some(Square::Occupied(Player::O)));
    assert_eq!(board.get(0), Some(Square::Occupied(Player::X)));
    assert_eq!(board.get(8), Some(Square::Occupied(Player::O)));
    assert_eq!(board.get(1), Some(Square::Empty));
    assert_eq!(engine.valid_cells(), vec![1, 2, 3, 5, 6, 7]);
}

#[test]
fn test_subscribers_receive_win_once() {
    use std::cell::Cell;
    use std::rc::Rc;

    let wins = Rc::new(Cell::new(0));
    let mut engine = GameEngine::new();
    let counter = Rc::clone(&wins);
    engine.subscribe(move |event: &RoundEvent| {
        if matches!(event, RoundEvent::RoundWon { .. }) {
            counter.set(counter.get() + 1);
        }
    });

    for cell in [3, 0, 4, 1, 8, 2, 5, 6, 7] {
        engine.place_piece(cell);
    }
    assert_eq!(wins.get(), 1);
}
