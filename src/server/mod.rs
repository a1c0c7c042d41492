// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the coordinator components:
//! - Shared state (player table, queue, registry)
//! - HTTP/WebSocket routing and the per-connection gateway
//! - Matchmaking (FIFO pairing)
//! - Game sessions (per-match locking and broadcast)
//! - Message routing and the wire protocol

pub mod state;
pub mod router;
pub mod session;
pub mod dispatch;
pub mod messages;
pub mod player;
pub mod matchmaking;
pub mod game_session;
pub mod ws_error;

#[cfg(test)]
pub(crate) mod test_support;
