/// Matchmaker.
///
/// Holds the FIFO queue of unpaired players and turns each arrival into
/// either a queued player or a new match with the longest-waiting player.
/// All decisions run under the queue lock.

use log::{debug, info};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

use crate::config::game::{FIRST_MARK, TEXT_WAITING};
use crate::server::game_session::registry::MatchRegistry;
use crate::server::game_session::server::GameSession;
use crate::server::messages::{MatchId, PlayerId, ServerMessage};
use crate::server::player::Player;

/// What happened to a player handed to the matchmaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pairing {
    Queued,
    Matched(MatchId),
}

#[derive(Default)]
pub struct Matchmaker {
    queue: Mutex<VecDeque<Arc<Player>>>,
}

impl Matchmaker {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    fn queue(&self) -> MutexGuard<'_, VecDeque<Arc<Player>>> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue `player`, or pair it with the head of the queue.
    ///
    /// The head is seated first and moves first. Both players are sent
    /// `matched` before the match is published to the registry, so no move
    /// can reach it earlier. Seats and the registry entry are in place before
    /// the queue lock is released, so a concurrent disconnect of either player
    /// always finds the match.
    pub fn enqueue_or_match(&self, player: Arc<Player>, registry: &MatchRegistry) -> Pairing {
        let mut queue = self.queue();

        let Some(opponent) = queue.pop_front() else {
            debug!("[Matchmaking] Player {} added to waiting queue", player.id);
            player.send(ServerMessage::Waiting { message: TEXT_WAITING.to_string() });
            queue.push_back(player);
            return Pairing::Queued;
        };

        let match_id = Uuid::new_v4();
        let session = GameSession::new(match_id, opponent.clone(), player.clone());
        session.announce();
        registry.insert(session);
        info!(
            "[Matchmaking] Match {} created with players {} ({}) and {} ({}), {} active",
            match_id, opponent.id, FIRST_MARK, player.id, FIRST_MARK.other(), registry.len()
        );
        Pairing::Matched(match_id)
    }

    /// Drop `player_id` from the queue if it is waiting. Returns whether it was.
    pub fn remove_if_waiting(&self, player_id: PlayerId) -> bool {
        let mut queue = self.queue();
        match queue.iter().position(|p| p.id == player_id) {
            Some(idx) => {
                queue.remove(idx);
                debug!("[Matchmaking] Player {} left waiting queue", player_id);
                true
            }
            None => false,
        }
    }

    pub fn waiting_len(&self) -> usize {
        self.queue().len()
    }

    #[cfg(test)]
    pub fn is_waiting(&self, player_id: PlayerId) -> bool {
        self.queue().iter().any(|p| p.id == player_id)
    }
}
