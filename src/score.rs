//! Session scoreboard.

use crate::games::vanishing::{Player, RoundEvent, RoundObserver};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Wins per player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    /// Rounds won by X.
    #[serde(rename = "X")]
    pub x: u32,
    /// Rounds won by O.
    #[serde(rename = "O")]
    pub o: u32,
}

impl Scores {
    /// Wins for the given player.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

/// Counts wins for one play session.
///
/// Rematches keep the tally; only leaving the session clears it.
#[derive(Debug, Clone, Default, Getters)]
pub struct ScoreTracker {
    scores: Scores,
}

impl ScoreTracker {
    /// Creates a tracker with both counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one win for `player`.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, player: Player) {
        let counter = match player {
            Player::X => &mut self.scores.x,
            Player::O => &mut self.scores.o,
        };
        *counter = counter.saturating_add(1);
        info!(x = self.scores.x, o = self.scores.o, "Win recorded");
    }

    /// Zeroes both counters.
    #[instrument(skip(self))]
    pub fn reset_session(&mut self) {
        info!("Scores cleared");
        self.scores = Scores::default();
    }

    /// Wins for the given player.
    pub fn score(&self, player: Player) -> u32 {
        self.scores.get(player)
    }
}

impl RoundObserver for ScoreTracker {
    fn on_event(&mut self, event: &RoundEvent) {
        if let RoundEvent::RoundWon { winner, .. } = event {
            self.record_win(*winner);
        }
    }
}
