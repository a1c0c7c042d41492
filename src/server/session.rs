//! WebSocket session for one player.
//!
//! This actor is the connection gateway: it registers the player when the
//! socket opens, relays text frames to the message router, writes every
//! outbound `ServerMessage` to the socket, and runs disconnect handling once
//! when it stops, whatever the reason.
use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::{debug, error, warn};
use std::sync::Arc;

use crate::server::dispatch;
use crate::server::messages::ServerMessage;
use crate::server::player::Player;
use crate::server::state::ServerContext;
use crate::server::ws_error::CoordinatorError;

pub struct PlayerSession {
    /// Set in `started`, once the actor has an address to receive on.
    player: Option<Arc<Player>>,
    state: web::Data<ServerContext>,
}

impl PlayerSession {
    pub fn new(state: web::Data<ServerContext>) -> Self {
        Self { player: None, state }
    }
}

impl Actor for PlayerSession {
    type Context = ws::WebsocketContext<Self>;

    /// Called when the socket opens. Registers the player and hands it to
    /// the matchmaker.
    fn started(&mut self, ctx: &mut Self::Context) {
        let player = Arc::new(Player::new(ctx.address().recipient()));
        self.player = Some(player.clone());
        self.state.connect(player);
    }

    /// Called exactly once when the session stops.
    fn stopped(&mut self, _ctx: &mut Self::Context) {
        if let Some(player) = self.player.take() {
            self.state.disconnect(player.id);
        }
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for PlayerSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        let Some(player) = self.player.clone() else {
            return;
        };
        match msg {
            Ok(ws::Message::Text(text)) => dispatch::route(&self.state, &player, &text),
            Ok(ws::Message::Binary(_)) => {
                player.send(ServerMessage::from(CoordinatorError::Protocol(
                    "binary frames are not supported".into(),
                )));
            }
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(reason)) => {
                debug!("[Gateway] Player {} closed the connection: {:?}", player.id, reason);
                ctx.close(reason);
                ctx.stop();
            }
            Ok(_) => (),
            Err(e) => {
                warn!("[Gateway] Transport error for player {}: {}", player.id, e);
                ctx.stop();
            }
        }
    }
}

impl Handler<ServerMessage> for PlayerSession {
    type Result = ();

    /// Writes a server message to the socket.
    fn handle(&mut self, msg: ServerMessage, ctx: &mut Self::Context) {
        match serde_json::to_string(&msg) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                error!("[Gateway] Failed to serialize ServerMessage: {}", e);
                ctx.text(r#"{"type":"error","error":"Internal server error"}"#);
            }
        }
    }
}

/// WebSocket endpoint. Every upgrade becomes a new player.
pub async fn ws_connect(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<ServerContext>,
) -> Result<HttpResponse, Error> {
    ws::start(PlayerSession::new(data), &req, stream)
}
