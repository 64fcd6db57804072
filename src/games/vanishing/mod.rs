//! Vanishing tic-tac-toe: each player keeps at most three pieces and the
//! oldest one disappears when a fourth is placed.

mod action;
mod contracts;
mod engine;
mod events;
pub mod invariants;
mod move_queue;
mod position;
pub mod rules;
mod snapshot;
mod state;
mod types;

pub use action::{Placement, Rejection};
pub use contracts::{CellIsEmpty, CellOnBoard, Contract, PlacementContract, RoundUndecided};
pub use engine::{DEFAULT_FIRST_PLAYER, GameEngine};
pub use events::{RoundEvent, RoundObserver};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, RoundInvariants};
pub use move_queue::{MAX_PIECES, MoveQueue};
pub use position::Position;
pub use rules::{WIN_LINES, WinLine, winning_line};
pub use snapshot::RoundSnapshot;
pub use state::{PlaceOutcome, RoundState, Transition};
pub use types::{Board, CELL_COUNT, Player, Square};
