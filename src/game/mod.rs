//! Game layer: board, marks and the per-match state machine.
//!
//! Nothing in here knows about connections; the server layer binds a
//! `GameState` to its two seated players.

pub mod types;
pub mod board;
pub mod state;

pub use board::Board;
pub use state::{GameRuleError, GameState};
pub use types::{Mark, MatchStatus, Winner};
