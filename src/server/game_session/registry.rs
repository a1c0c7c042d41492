/// Match registry: match id → running game session.
///
/// The map lock is only held to look up, insert or remove an entry. Moves
/// lock the session itself, so matches never wait on each other.

use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::server::game_session::server::GameSession;
use crate::server::messages::MatchId;

pub type SharedSession = Arc<Mutex<GameSession>>;

#[derive(Default)]
pub struct MatchRegistry {
    sessions: RwLock<HashMap<MatchId, SharedSession>>,
}

impl MatchRegistry {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, session: GameSession) -> SharedSession {
        let match_id = session.match_id;
        let shared = Arc::new(Mutex::new(session));
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(match_id, shared.clone());
        debug!("[Registry] Inserted match_id={}", match_id);
        shared
    }

    pub fn get(&self, match_id: &MatchId) -> Option<SharedSession> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(match_id)
            .cloned()
    }

    /// Remove an entry. Only the first caller for a given id gets it back.
    pub fn remove(&self, match_id: &MatchId) -> Option<SharedSession> {
        let removed = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(match_id);
        if removed.is_some() {
            debug!("[Registry] Removed match_id={}", match_id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lock a session, recovering it if a previous holder panicked.
pub fn lock_session(session: &SharedSession) -> std::sync::MutexGuard<'_, GameSession> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}
