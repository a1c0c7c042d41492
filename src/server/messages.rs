//! Wire protocol: JSON text frames tagged by `type`.

use actix::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::game::{Board, Mark, MatchStatus, Winner};
use crate::server::ws_error::CoordinatorError;

pub type PlayerId = Uuid;
pub type MatchId = Uuid;

// Server -> client
#[derive(Message, Serialize, Clone, Debug, PartialEq)]
#[rtype(result = "()")]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    #[serde(rename_all = "camelCase")]
    Connected {
        player_id: PlayerId,
        message: String,
    },
    Waiting {
        message: String,
    },
    #[serde(rename_all = "camelCase")]
    Matched {
        player_id: PlayerId,
        match_id: MatchId,
        mark: Mark,
        board: Board,
        turn: Option<Mark>,
        status: MatchStatus,
        message: String,
    },
    Update {
        board: Board,
        #[serde(skip_serializing_if = "Option::is_none")]
        turn: Option<Mark>,
        /// Personalized, human-readable status.
        status: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        winner: Option<Winner>,
        message: String,
    },
    Error {
        error: String,
    },
    OpponentDisconnected {
        message: String,
    },
}

impl ServerMessage {
    pub fn error(err: &CoordinatorError) -> Self {
        Self::Error { error: err.to_string() }
    }
}

impl From<CoordinatorError> for ServerMessage {
    fn from(err: CoordinatorError) -> Self {
        Self::error(&err)
    }
}

#[derive(Deserialize, Debug)]
struct MovePayload {
    row: i64,
    col: i64,
}

/// Decoded client message. Types this server does not know are kept so the
/// router can drop them after resolving the sender's match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientMessage {
    Move { row: i64, col: i64 },
    Unknown(String),
}

impl ClientMessage {
    /// Parse one text frame. Fails on anything that is not a JSON object with
    /// a string `type`, or on a `move` without integer coordinates.
    pub fn parse(text: &str) -> Result<Self, CoordinatorError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| CoordinatorError::Protocol(e.to_string()))?;
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| CoordinatorError::Protocol("missing message type".into()))?
            .to_owned();

        match kind.as_str() {
            "move" => {
                let payload: MovePayload = serde_json::from_value(value)
                    .map_err(|e| CoordinatorError::Protocol(e.to_string()))?;
                Ok(Self::Move { row: payload.row, col: payload.col })
            }
            _ => Ok(Self::Unknown(kind)),
        }
    }
}
