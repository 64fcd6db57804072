//! Outward notifications emitted by the engine.

use super::rules::WinLine;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// Something that happened to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A piece was placed and the round goes on.
    PiecePlaced {
        /// Player who placed.
        player: Player,
        /// Cell the piece landed on.
        cell: usize,
        /// Cell freed by the vanishing rule, if any.
        evicted: Option<usize>,
    },
    /// A placement completed a line.
    RoundWon {
        /// Winning player.
        winner: Player,
        /// Completed line.
        line: WinLine,
    },
    /// A new round started.
    RoundReset {
        /// Player opening the new round.
        starter: Player,
    },
}

/// Receives round events from a [`GameEngine`](super::GameEngine).
///
/// Closures taking `&RoundEvent` are observers too.
pub trait RoundObserver {
    /// Called once per event, after the engine state has been replaced.
    fn on_event(&mut self, event: &RoundEvent);
}

impl<F> RoundObserver for F
where
    F: FnMut(&RoundEvent),
{
    fn on_event(&mut self, event: &RoundEvent) {
        self(event)
    }
}
