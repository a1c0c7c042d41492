//! HTTP and WebSocket routing configuration.
//!
//! The coordinator exposes a single WebSocket endpoint; each upgrade is
//! handled by its own `PlayerSession` actor.

use actix_web::web;

use crate::config::server::WS_PATH;
use crate::server::session::ws_connect;

/// Configure the application's routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(WS_PATH).route(web::get().to(ws_connect)));
}
