//! A connected player and its outbound handle.

use actix::Recipient;
use log::warn;
use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

use crate::game::Mark;
use crate::server::messages::{MatchId, PlayerId, ServerMessage};

/// Where a player sits once paired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat {
    pub match_id: MatchId,
    pub mark: Mark,
}

pub struct Player {
    pub id: PlayerId,
    seat: Mutex<Option<Seat>>,
    /// Mailbox of the connection actor; that actor is the only socket writer.
    outbox: Recipient<ServerMessage>,
}

impl Player {
    /// New unseated player with a fresh random id.
    pub fn new(outbox: Recipient<ServerMessage>) -> Self {
        Self {
            id: Uuid::new_v4(),
            seat: Mutex::new(None),
            outbox,
        }
    }

    pub fn seat(&self) -> Option<Seat> {
        *self.seat.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn take_seat(&self, seat: Seat) {
        *self.seat.lock().unwrap_or_else(PoisonError::into_inner) = Some(seat);
    }

    /// Queue a message for this player's connection. Never blocks.
    pub fn send(&self, msg: ServerMessage) {
        if !self.outbox.connected() {
            warn!("[Player] Dropping message for closed connection player_id={}", self.id);
            return;
        }
        self.outbox.do_send(msg);
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .field("seat", &self.seat())
            .finish()
    }
}
