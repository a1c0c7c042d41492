//! Message router: decoded client messages → the sender's match.

use log::debug;

use crate::server::game_session::registry::{SharedSession, lock_session};
use crate::server::messages::{ClientMessage, ServerMessage};
use crate::server::player::Player;
use crate::server::state::ServerContext;
use crate::server::ws_error::CoordinatorError;

/// Handle one inbound text frame from `player`.
///
/// Errors are replied to the sender only. Unknown message types are dropped.
pub fn route(ctx: &ServerContext, player: &Player, text: &str) {
    if let Err(err) = try_route(ctx, player, text) {
        debug!("[Router] player_id={} rejected: {}", player.id, err);
        player.send(ServerMessage::from(err));
    }
}

fn try_route(ctx: &ServerContext, player: &Player, text: &str) -> Result<(), CoordinatorError> {
    let msg = ClientMessage::parse(text)?;
    let session = resolve_match(ctx, player)?;

    match msg {
        ClientMessage::Move { row, col } => {
            let mut game = lock_session(&session);
            game.play(player.id, row, col)
        }
        ClientMessage::Unknown(kind) => {
            debug!("[Router] Ignoring message type '{}' from player_id={}", kind, player.id);
            Ok(())
        }
    }
}

fn resolve_match(ctx: &ServerContext, player: &Player) -> Result<SharedSession, CoordinatorError> {
    let seat = player.seat().ok_or(CoordinatorError::MatchNotFound)?;
    ctx.registry.get(&seat.match_id).ok_or(CoordinatorError::MatchNotFound)
}
