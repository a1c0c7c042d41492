//! Test doubles for connection mailboxes.

use actix::prelude::*;
use std::sync::Arc;

use crate::server::messages::ServerMessage;
use crate::server::player::Player;

/// Stands in for a connection actor and records what it was sent.
#[derive(Default)]
struct Collector {
    received: Vec<ServerMessage>,
}

impl Actor for Collector {
    type Context = Context<Self>;
}

impl Handler<ServerMessage> for Collector {
    type Result = ();

    fn handle(&mut self, msg: ServerMessage, _: &mut Context<Self>) {
        self.received.push(msg);
    }
}

#[derive(Message)]
#[rtype(result = "Vec<ServerMessage>")]
struct Drain;

impl Handler<Drain> for Collector {
    type Result = MessageResult<Drain>;

    fn handle(&mut self, _: Drain, _: &mut Context<Self>) -> Self::Result {
        MessageResult(std::mem::take(&mut self.received))
    }
}

pub struct Inbox {
    addr: Addr<Collector>,
}

impl Inbox {
    /// A player whose messages land in the returned inbox.
    pub fn player() -> (Arc<Player>, Inbox) {
        let addr = Collector::default().start();
        let player = Arc::new(Player::new(addr.clone().recipient()));
        (player, Inbox { addr })
    }

    /// Everything received so far, in order. Messages queued before this
    /// call are always included.
    pub async fn drain(&self) -> Vec<ServerMessage> {
        self.addr.send(Drain).await.expect("collector stopped")
    }
}
