//! Round state and its pure transition function.

use super::action::{Placement, Rejection};
use super::contracts::{Contract, PlacementContract};
use super::events::RoundEvent;
use super::move_queue::MoveQueue;
use super::rules::{WinLine, winning_line};
use super::types::{Board, CELL_COUNT, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete state of one round.
///
/// Values are never edited in place by callers: every placement produces a
/// new `RoundState` and the old one stays valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    x_moves: MoveQueue,
    o_moves: MoveQueue,
    current_player: Player,
    winner: Option<Player>,
    winning_line: Option<WinLine>,
}

/// What a placement did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// The piece was placed and the turn passed to the opponent.
    Placed {
        /// Cell freed by the vanishing rule, if any.
        evicted: Option<usize>,
    },
    /// The piece was placed and completed a line. The round is frozen.
    Won {
        /// Cell freed by the vanishing rule, if any.
        evicted: Option<usize>,
        /// The line that was completed.
        line: WinLine,
    },
    /// The placement was ignored; the state is unchanged.
    Rejected(Rejection),
}

/// Result of a placement: the next round state and what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    state: RoundState,
    placement: Placement,
    outcome: PlaceOutcome,
}

impl Transition {
    /// The round state after the placement.
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Consumes the transition, returning the new state.
    pub fn into_state(self) -> RoundState {
        self.state
    }

    /// The attempted placement.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// What the placement did.
    pub fn outcome(&self) -> PlaceOutcome {
        self.outcome
    }

    /// Winner and line, if this placement decided the round.
    pub fn win(&self) -> Option<(Player, WinLine)> {
        match self.outcome {
            PlaceOutcome::Won { line, .. } => Some((self.placement.player, line)),
            _ => None,
        }
    }

    /// Reason the placement was ignored, if it was.
    pub fn rejection(&self) -> Option<Rejection> {
        match self.outcome {
            PlaceOutcome::Rejected(reason) => Some(reason),
            _ => None,
        }
    }

    /// Event to announce for this placement; ignored placements have none.
    pub fn event(&self) -> Option<RoundEvent> {
        let Placement { player, cell } = self.placement;
        match self.outcome {
            PlaceOutcome::Placed { evicted } => Some(RoundEvent::PiecePlaced {
                player,
                cell,
                evicted,
            }),
            PlaceOutcome::Won { line, .. } => Some(RoundEvent::RoundWon {
                winner: player,
                line,
            }),
            PlaceOutcome::Rejected(_) => None,
        }
    }

    /// Cell freed by the vanishing rule, if any.
    pub fn evicted(&self) -> Option<usize> {
        match self.outcome {
            PlaceOutcome::Placed { evicted } | PlaceOutcome::Won { evicted, .. } => evicted,
            PlaceOutcome::Rejected(_) => None,
        }
    }
}

impl RoundState {
    /// Creates an empty round opened by `starter`.
    pub fn new(starter: Player) -> Self {
        Self {
            x_moves: MoveQueue::new(),
            o_moves: MoveQueue::new(),
            current_player: starter,
            winner: None,
            winning_line: None,
        }
    }

    /// Assembles a state from raw parts without checking invariants.
    ///
    /// Intended for tests and invariant tooling.
    pub fn from_parts(
        x_moves: MoveQueue,
        o_moves: MoveQueue,
        current_player: Player,
        winner: Option<Player>,
        winning_line: Option<WinLine>,
    ) -> Self {
        Self {
            x_moves,
            o_moves,
            current_player,
            winner,
            winning_line,
        }
    }

    /// X's active pieces, oldest first.
    pub fn x_moves(&self) -> &MoveQueue {
        &self.x_moves
    }

    /// O's active pieces, oldest first.
    pub fn o_moves(&self) -> &MoveQueue {
        &self.o_moves
    }

    /// Active pieces of the given player.
    pub fn moves(&self, player: Player) -> &MoveQueue {
        match player {
            Player::X => &self.x_moves,
            Player::O => &self.o_moves,
        }
    }

    /// Player whose turn it is (the winner, once the round is decided).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Winner of the round, if decided.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Line completed by the winner, if decided.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }

    /// Returns true once a winner is set.
    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }

    /// Board view of both queues.
    pub fn board(&self) -> Board {
        Board::from_queues(&self.x_moves, &self.o_moves)
    }

    /// Owner of the cell, or `None` if it is empty or off the board.
    pub fn piece_at(&self, cell: usize) -> Option<Player> {
        if self.x_moves.contains(cell) {
            Some(Player::X)
        } else if self.o_moves.contains(cell) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Cell that will vanish on the player's next placement.
    ///
    /// Only a full queue has a piece about to vanish.
    pub fn next_to_vanish(&self, player: Player) -> Option<usize> {
        let queue = self.moves(player);
        if queue.is_full() {
            queue.oldest()
        } else {
            None
        }
    }

    /// Cell of the mover's piece that will vanish if they place now.
    ///
    /// Nothing is dying once the round is decided.
    pub fn dying_piece(&self) -> Option<usize> {
        if self.is_decided() {
            None
        } else {
            self.next_to_vanish(self.current_player)
        }
    }

    /// Empty cells a placement would be accepted on.
    pub fn valid_cells(&self) -> Vec<usize> {
        if self.is_decided() {
            return Vec::new();
        }
        (0..CELL_COUNT)
            .filter(|&cell| self.piece_at(cell).is_none())
            .collect()
    }

    /// Pieces the player can still add before their oldest starts vanishing.
    pub fn pieces_remaining(&self, player: Player) -> usize {
        super::MAX_PIECES.saturating_sub(self.moves(player).len())
    }

    /// Returns true if the player's next placement will evict a piece.
    pub fn is_rotating(&self, player: Player) -> bool {
        self.moves(player).is_full()
    }

    /// Places a piece for the current player.
    ///
    /// Returns a new state; `self` is untouched. Ignored placements (round
    /// decided, cell occupied, cell off the board) return an equal state with
    /// a [`PlaceOutcome::Rejected`] outcome.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place(&self, cell: usize) -> Transition {
        let placement = Placement::new(self.current_player, cell);

        if let Err(reason) = PlacementContract::pre(self, &placement) {
            debug!(%reason, "Placement ignored");
            return Transition {
                state: self.clone(),
                placement,
                outcome: PlaceOutcome::Rejected(reason),
            };
        }

        let mut next = self.clone();
        let queue = match placement.player {
            Player::X => &mut next.x_moves,
            Player::O => &mut next.o_moves,
        };
        let evicted = queue.push(cell);
        if let Some(evicted) = evicted {
            debug!(evicted, "Oldest piece vanished");
        }

        // Only the mover's queue changed, so only the mover can have won.
        let outcome = match winning_line(next.moves(placement.player)) {
            Some(line) => {
                next.winner = Some(placement.player);
                next.winning_line = Some(line);
                PlaceOutcome::Won { evicted, line }
            }
            None => {
                next.current_player = placement.player.opponent();
                PlaceOutcome::Placed { evicted }
            }
        };

        // Postcondition: verify contract in debug builds
        #[cfg(debug_assertions)]
        if let Err(violations) = PlacementContract::post(self, &next) {
            tracing::warn!(?violations, "Placement broke round invariants");
            debug_assert!(false, "Placement broke round invariants: {:?}", violations);
        }

        Transition {
            state: next,
            placement,
            outcome,
        }
    }
}
