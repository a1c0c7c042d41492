//! A running match: the state machine bound to its two seated players.
//!
//! The registry hands sessions out behind their own mutex, so everything in
//! here runs with that match serialized and no other match blocked.

use log::{debug, info};
use std::sync::Arc;

use crate::config::game::{
    FIRST_MARK, TEXT_DRAW, TEXT_OPPONENT_TURN, TEXT_YOU_LOST, TEXT_YOU_WON, TEXT_YOUR_TURN,
};
use crate::game::{GameState, Mark, Winner};
use crate::server::messages::{MatchId, PlayerId, ServerMessage};
use crate::server::player::{Player, Seat};
use crate::server::ws_error::CoordinatorError;

pub struct GameSession {
    pub match_id: MatchId,
    /// Seat order: index 0 holds the first mark.
    seats: [Arc<Player>; 2],
    pub state: GameState,
}

impl GameSession {
    /// Seat `first` with the first mark and `second` with the other one.
    /// Both players get their seat recorded.
    pub fn new(match_id: MatchId, first: Arc<Player>, second: Arc<Player>) -> Self {
        first.take_seat(Seat { match_id, mark: FIRST_MARK });
        second.take_seat(Seat { match_id, mark: FIRST_MARK.other() });
        Self {
            match_id,
            seats: [first, second],
            state: GameState::new(),
        }
    }

    pub fn mark_of(&self, player_id: PlayerId) -> Option<Mark> {
        self.seats
            .iter()
            .position(|p| p.id == player_id)
            .map(|idx| if idx == 0 { FIRST_MARK } else { FIRST_MARK.other() })
    }

    /// The seated player that is not `player_id`.
    pub fn opponent_of(&self, player_id: PlayerId) -> Option<&Arc<Player>> {
        match self.seats.iter().position(|p| p.id == player_id)? {
            0 => Some(&self.seats[1]),
            _ => Some(&self.seats[0]),
        }
    }

    /// Send each seat its `matched` notice.
    pub fn announce(&self) {
        for player in &self.seats {
            let Some(mark) = self.mark_of(player.id) else { continue };
            let message = if Some(mark) == self.state.turn {
                format!("Game started! You are {mark}. Your turn.")
            } else {
                format!("Game started! You are {mark}. Waiting for {}...", mark.other())
            };
            player.send(ServerMessage::Matched {
                player_id: player.id,
                match_id: self.match_id,
                mark,
                board: self.state.board,
                turn: self.state.turn,
                status: self.state.status,
                message,
            });
        }
    }

    /// Apply a move from `player_id` and broadcast the result.
    ///
    /// A refused move is returned to the caller untouched; nothing is
    /// broadcast and the state does not change.
    pub fn play(&mut self, player_id: PlayerId, row: i64, col: i64) -> Result<(), CoordinatorError> {
        let mark = self.mark_of(player_id).ok_or(CoordinatorError::MatchNotFound)?;
        self.state.apply_move(mark, row, col)?;
        debug!(
            "[GameSession] match_id={} {} played ({}, {}) turn={:?}",
            self.match_id, mark, row, col, self.state.turn
        );
        if let Some(winner) = self.state.winner {
            info!("[GameSession] match_id={} finished winner={:?}", self.match_id, winner);
        }
        self.broadcast_state();
        Ok(())
    }

    fn broadcast_state(&self) {
        for player in &self.seats {
            let Some(mark) = self.mark_of(player.id) else { continue };
            let status = self.status_text(mark).to_string();
            player.send(ServerMessage::Update {
                board: self.state.board,
                turn: self.state.turn,
                status: status.clone(),
                winner: self.state.winner,
                message: status,
            });
        }
    }

    /// Human-readable status as seen by the holder of `mark`.
    pub fn status_text(&self, mark: Mark) -> &'static str {
        match self.state.winner {
            Some(Winner::Draw) => TEXT_DRAW,
            Some(Winner::Mark(w)) if w == mark => TEXT_YOU_WON,
            Some(Winner::Mark(_)) => TEXT_YOU_LOST,
            None if self.state.turn == Some(mark) => TEXT_YOUR_TURN,
            None => TEXT_OPPONENT_TURN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameRuleError, MatchStatus};
    use crate::server::test_support::Inbox;
    use uuid::Uuid;

    #[actix_web::test]
    async fn test_new_session_seats_players() {
        let (a, _ia) = Inbox::player();
        let (b, _ib) = Inbox::player();
        let id = Uuid::new_v4();
        let session = GameSession::new(id, a.clone(), b.clone());

        assert_eq!(a.seat(), Some(Seat { match_id: id, mark: Mark::X }));
        assert_eq!(b.seat(), Some(Seat { match_id: id, mark: Mark::O }));
        assert_eq!(session.opponent_of(a.id).map(|p| p.id), Some(b.id));
        assert_eq!(session.opponent_of(b.id).map(|p| p.id), Some(a.id));
        assert!(session.opponent_of(Uuid::new_v4()).is_none());
    }

    #[actix_web::test]
    async fn test_announce_messages() {
        let (a, ia) = Inbox::player();
        let (b, ib) = Inbox::player();
        let session = GameSession::new(Uuid::new_v4(), a, b);
        session.announce();

        match ia.drain().await.as_slice() {
            [ServerMessage::Matched { mark, turn, status, message, .. }] => {
                assert_eq!(*mark, Mark::X);
                assert_eq!(*turn, Some(Mark::X));
                assert_eq!(*status, MatchStatus::Active);
                assert_eq!(message, "Game started! You are X. Your turn.");
            }
            other => panic!("unexpected {:?}", other),
        }
        match ib.drain().await.as_slice() {
            [ServerMessage::Matched { mark, message, .. }] => {
                assert_eq!(*mark, Mark::O);
                assert_eq!(message, "Game started! You are O. Waiting for X...");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_play_broadcasts_personalized_status() {
        let (a, ia) = Inbox::player();
        let (b, ib) = Inbox::player();
        let mut session = GameSession::new(Uuid::new_v4(), a.clone(), b);
        session.play(a.id, 0, 0).unwrap();

        let to_a = ia.drain().await;
        let to_b = ib.drain().await;
        assert!(matches!(to_a.as_slice(), [ServerMessage::Update { status, turn: Some(Mark::O), .. }] if status == "Opponent's turn"));
        assert!(matches!(to_b.as_slice(), [ServerMessage::Update { status, turn: Some(Mark::O), .. }] if status == "Your turn"));
    }

    #[actix_web::test]
    async fn test_rejected_move_is_not_broadcast() {
        let (a, ia) = Inbox::player();
        let (b, ib) = Inbox::player();
        let mut session = GameSession::new(Uuid::new_v4(), a, b.clone());
        let before = session.state.clone();

        let err = session.play(b.id, 0, 0).unwrap_err();
        assert_eq!(err, CoordinatorError::Rule(GameRuleError::NotYourTurn));
        assert_eq!(session.state, before);
        assert!(ia.drain().await.is_empty());
        assert!(ib.drain().await.is_empty());
    }

    #[actix_web::test]
    async fn test_status_text_after_draw() {
        let (a, _ia) = Inbox::player();
        let (b, _ib) = Inbox::player();
        let mut session = GameSession::new(Uuid::new_v4(), a, b);
        session.state.status = MatchStatus::Finished;
        session.state.turn = None;
        session.state.winner = Some(Winner::Draw);
        assert_eq!(session.status_text(Mark::X), "Game ended in a draw!");
        assert_eq!(session.status_text(Mark::O), "Game ended in a draw!");
    }
}
