//! Play session: menu/play navigation, the current round and the scoreboard.

use crate::config::GameConfig;
use crate::games::vanishing::{GameEngine, Player, RoundObserver, RoundState, Transition};
use crate::score::ScoreTracker;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    /// Entry menu, no round in progress.
    Menu,
    /// A round is on the board.
    Playing,
}

/// A play session.
///
/// Entering play mounts a fresh engine; leaving drops it and clears the
/// scores. Rematches within play keep the scores.
#[derive(Debug, Getters)]
pub struct Session {
    view: View,
    #[getter(skip)]
    engine: Option<GameEngine>,
    scores: ScoreTracker,
    first_player: Player,
}

impl Session {
    /// Creates a session on the menu.
    #[instrument]
    pub fn new(first_player: Player) -> Self {
        info!("Creating new session");
        Self {
            view: View::Menu,
            engine: None,
            scores: ScoreTracker::new(),
            first_player,
        }
    }

    /// Creates a session using the configured first player.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(*config.first_player())
    }

    /// Leaves the menu and starts the first round.
    ///
    /// Does nothing if a round is already on the board.
    #[instrument(skip(self))]
    pub fn start_game(&mut self) -> &RoundState {
        let first_player = self.first_player;
        if self.engine.is_none() {
            info!(%first_player, "Starting game");
        }
        self.view = View::Playing;
        self.engine
            .get_or_insert_with(|| GameEngine::with_first_player(first_player))
            .state()
    }

    /// Places a piece for the current player.
    ///
    /// Returns `None` on the menu. A winning placement is recorded on the
    /// scoreboard before returning.
    #[instrument(skip(self))]
    pub fn place_piece(&mut self, cell: usize) -> Option<Transition> {
        let engine = self.engine.as_mut()?;
        let transition = engine.place_piece(cell);
        if let Some(event) = transition.event() {
            self.scores.on_event(&event);
        }
        Some(transition)
    }

    /// Starts a rematch with the other player opening.
    ///
    /// Returns `None` on the menu.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Option<RoundState> {
        self.engine.as_mut().map(GameEngine::reset)
    }

    /// Returns to the menu, discarding the round and the scores.
    #[instrument(skip(self))]
    pub fn back_to_menu(&mut self) {
        info!("Returning to menu");
        self.engine = None;
        self.scores.reset_session();
        self.view = View::Menu;
    }

    /// Current round, if playing.
    pub fn round(&self) -> Option<&RoundState> {
        self.engine.as_ref().map(GameEngine::state)
    }

    /// Engine of the current round, if playing.
    pub fn engine(&self) -> Option<&GameEngine> {
        self.engine.as_ref()
    }

    /// Mutable engine access, e.g. to subscribe observers to the round.
    ///
    /// Observers live as long as the engine: going back to the menu drops them.
    pub fn engine_mut(&mut self) -> Option<&mut GameEngine> {
        debug!(playing = self.engine.is_some(), "Engine access");
        self.engine.as_mut()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}
