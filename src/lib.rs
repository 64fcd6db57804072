//! Vanishing tic-tac-toe.
//!
//! Tic-tac-toe where each player keeps at most three pieces on the board:
//! placing a fourth makes that player's oldest piece vanish.
//!
//! # Architecture
//!
//! - **Engine**: round state, placement, eviction, win detection, rematches
//! - **Scores**: per-session win counter fed by the engine's win events
//! - **Session**: menu/play navigation owning one engine and the scoreboard
//! - **TUI**: ratatui front end rendering the session
//!
//! # Example
//!
//! ```
//! use vanishing_tictactoe::{GameEngine, Player};
//!
//! let mut engine = GameEngine::new();
//! for cell in [3, 0, 4, 1, 8, 2] {
//!     engine.place_piece(cell);
//! }
//! assert_eq!(engine.state().winner(), Some(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod logging;
mod score;
mod session;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Logging
pub use logging::{init_file_logging, init_stderr_logging};

// Crate-level exports - Scores
pub use score::{ScoreTracker, Scores};

// Crate-level exports - Session management
pub use session::{Session, View};

// Crate-level exports - Game types
pub use games::vanishing::{
    Board, CELL_COUNT, CellIsEmpty, CellOnBoard, Contract, DEFAULT_FIRST_PLAYER, GameEngine,
    Invariant, InvariantSet, InvariantViolation, MAX_PIECES, MoveQueue, PlaceOutcome, Placement,
    PlacementContract, Player, Position, Rejection, RoundEvent, RoundInvariants, RoundObserver,
    RoundSnapshot, RoundState, RoundUndecided, Square, Transition, WIN_LINES, WinLine,
    winning_line,
};

/// Individual round invariants.
pub mod invariants {
    pub use crate::games::vanishing::invariants::{
        DecidedRoundInvariant, ExclusiveOccupancyInvariant, QueueCapacityInvariant,
    };
}
