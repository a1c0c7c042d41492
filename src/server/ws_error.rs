//! Errors a connection can run into.
//!
//! Every variant is scoped to one connection: it becomes an `error` message
//! for the sender and never touches other players or the process.
use thiserror::Error;

use crate::game::GameRuleError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinatorError {
    /// Inbound frame that could not be decoded.
    #[error("Invalid message: {0}")]
    Protocol(String),

    /// The sender holds no seat, or its match is gone.
    #[error("Match not found")]
    MatchNotFound,

    #[error(transparent)]
    Rule(#[from] GameRuleError),
}
