// src/server/state.rs

//! Shared coordinator state.
//!
//! One `ServerContext` lives for the whole process and is handed to every
//! connection through `web::Data`. It owns the player table, the matchmaking
//! queue and the match registry, each behind its own lock.

use log::{debug, info};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::game::{TEXT_CONNECTED, TEXT_OPPONENT_DISCONNECTED};
use crate::server::game_session::{MatchRegistry, registry::lock_session};
use crate::server::matchmaking::{Matchmaker, Pairing};
use crate::server::messages::{PlayerId, ServerMessage};
use crate::server::player::Player;

#[derive(Default)]
pub struct ServerContext {
    players: Mutex<HashMap<PlayerId, Arc<Player>>>,
    pub matchmaker: Matchmaker,
    pub registry: MatchRegistry,
}

impl ServerContext {
    pub fn new() -> Self {
        Self::default()
    }

    fn players(&self) -> MutexGuard<'_, HashMap<PlayerId, Arc<Player>>> {
        self.players.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a new connection: add it to the player table, greet it, then
    /// hand it to the matchmaker.
    pub fn connect(&self, player: Arc<Player>) -> Pairing {
        self.players().insert(player.id, player.clone());
        info!("[Gateway] Player {} connected ({} online)", player.id, self.player_count());
        player.send(ServerMessage::Connected {
            player_id: player.id,
            message: TEXT_CONNECTED.to_string(),
        });
        self.matchmaker.enqueue_or_match(player, &self.registry)
    }

    pub fn player_count(&self) -> usize {
        self.players().len()
    }

    /// Tear down everything a closed connection owned.
    ///
    /// Leaving the player table is the once-guard: a second call for the same
    /// id finds nothing and returns. The queue is checked before the seat so a
    /// pairing racing with this call is either undone here or never happens.
    pub fn disconnect(&self, player_id: PlayerId) {
        let Some(player) = self.players().remove(&player_id) else {
            debug!("[Gateway] Disconnect for unknown player {} ignored", player_id);
            return;
        };

        if self.matchmaker.remove_if_waiting(player_id) {
            info!(
                "[Gateway] Player {} disconnected while waiting ({} still queued)",
                player_id,
                self.matchmaker.waiting_len()
            );
            return;
        }

        if let Some(seat) = player.seat() {
            if let Some(session) = self.registry.remove(&seat.match_id) {
                if let Some(opponent) = lock_session(&session).opponent_of(player_id) {
                    opponent.send(ServerMessage::OpponentDisconnected {
                        message: TEXT_OPPONENT_DISCONNECTED.to_string(),
                    });
                }
                info!("[Gateway] Match {} closed, player {} left", seat.match_id, player_id);
            }
        }
        info!("[Gateway] Player {} disconnected", player_id);
    }
}
