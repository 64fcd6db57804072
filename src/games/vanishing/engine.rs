//! The game engine: owns the round, the starter rotation and the observers.

use super::events::{RoundEvent, RoundObserver};
use super::state::{RoundState, Transition};
use super::types::Player;
use tracing::{debug, info, instrument};

/// Player who opens the first round when nothing else is configured.
pub const DEFAULT_FIRST_PLAYER: Player = Player::O;

/// Vanishing tic-tac-toe engine.
///
/// The engine is the only owner of the current [`RoundState`]. Each
/// operation replaces the state wholesale and notifies subscribers.
pub struct GameEngine {
    state: RoundState,
    starter: Player,
    observers: Vec<Box<dyn RoundObserver>>,
}

impl GameEngine {
    /// Creates an engine whose first round is opened by O.
    pub fn new() -> Self {
        Self::with_first_player(DEFAULT_FIRST_PLAYER)
    }

    /// Creates an engine whose first round is opened by `first_player`.
    #[instrument]
    pub fn with_first_player(first_player: Player) -> Self {
        debug!("Creating game engine");
        Self {
            state: RoundState::new(first_player),
            starter: first_player,
            observers: Vec::new(),
        }
    }

    /// Returns the current round state.
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Player who opened the current round.
    pub fn starting_player(&self) -> Player {
        self.starter
    }

    /// Registers an observer for every subsequent event.
    pub fn subscribe(&mut self, observer: impl RoundObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Places a piece for the current player on `cell`.
    ///
    /// Ignored placements leave the state as it was and notify nobody.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn place_piece(&mut self, cell: usize) -> Transition {
        let transition = self.state.place(cell);
        let Some(event) = transition.event() else {
            return transition;
        };

        if let RoundEvent::RoundWon { winner, line } = event {
            info!(%winner, %line, "Round won");
        }

        self.state = transition.state().clone();
        self.notify(&event);
        transition
    }

    /// Starts a new round, handing the opening move to the other player.
    ///
    /// Scores are not part of the engine and are never touched here.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> RoundState {
        self.starter = self.starter.opponent();
        self.state = RoundState::new(self.starter);
        info!(starter = %self.starter, "New round");
        self.notify(&RoundEvent::RoundReset {
            starter: self.starter,
        });
        self.state.clone()
    }

    /// Owner of the cell, or `None` if empty.
    pub fn piece_at(&self, cell: usize) -> Option<Player> {
        self.state.piece_at(cell)
    }

    /// Cell that will vanish on the player's next placement.
    pub fn next_to_vanish(&self, player: Player) -> Option<usize> {
        self.state.next_to_vanish(player)
    }

    /// Cell of the mover's piece about to vanish, while the round is open.
    pub fn dying_piece(&self) -> Option<usize> {
        self.state.dying_piece()
    }

    /// Cells a placement would be accepted on.
    pub fn valid_cells(&self) -> Vec<usize> {
        self.state.valid_cells()
    }

    fn notify(&mut self, event: &RoundEvent) {
        debug!(?event, observers = self.observers.len(), "Notifying observers");
        for observer in &mut self.observers {
            observer.on_event(event);
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("state", &self.state)
            .field("starter", &self.starter)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder(engine: &mut GameEngine) -> Rc<RefCell<Vec<RoundEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        engine.subscribe(move |event: &RoundEvent| sink.borrow_mut().push(*event));
        events
    }

    #[test]
    fn test_first_round_opened_by_o() {
        let engine = GameEngine::new();
        assert_eq!(engine.state().current_player(), Player::O);
        assert_eq!(engine.starting_player(), Player::O);
    }

    #[test]
    fn test_reset_alternates_starter() {
        let mut engine = GameEngine::new();
        let starters: Vec<Player> = (0..4).map(|_| engine.reset().current_player()).collect();
        assert_eq!(starters, vec![Player::X, Player::O, Player::X, Player::O]);
    }

    #[test]
    fn test_reset_clears_round() {
        let mut engine = GameEngine::new();
        engine.place_piece(4);
        engine.place_piece(0);
        let state = engine.reset();
        assert!(state.x_moves().is_empty());
        assert!(state.o_moves().is_empty());
        assert_eq!(state.winner(), None);
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_observers_see_placements_and_wins() {
        let mut engine = GameEngine::with_first_player(Player::X);
        let events = recorder(&mut engine);

        for cell in [0, 3, 1, 4, 2] {
            engine.place_piece(cell);
        }

        let events = events.borrow();
        assert_eq!(events.len(), 5);
        assert_eq!(
            events[4],
            RoundEvent::RoundWon {
                winner: Player::X,
                line: crate::games::vanishing::WIN_LINES[0],
            }
        );
    }

    #[test]
    fn test_rejections_are_silent() {
        let mut engine = GameEngine::new();
        let events = recorder(&mut engine);

        engine.place_piece(4);
        let before = engine.state().clone();
        let transition = engine.place_piece(4);

        assert!(transition.rejection().is_some());
        assert_eq!(engine.state(), &before);
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn test_reset_is_announced() {
        let mut engine = GameEngine::new();
        let events = recorder(&mut engine);
        engine.reset();
        assert_eq!(
            events.borrow().as_slice(),
            &[RoundEvent::RoundReset { starter: Player::X }]
        );
    }
}
