//! Main entry point for the tic-tac-toe server.
//!
//! Parses the listen address, builds the shared coordinator state, and
//! launches the HTTP server with the WebSocket endpoint for players.

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use log::info;

use config::server::ServerArgs;
use server::state::ServerContext;

pub mod config;
mod game;
mod server;


#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = ServerArgs::parse();

    // Shared coordinator state: player table, matchmaking queue, match registry.
    let state = web::Data::new(ServerContext::new());

    info!("Server starting on {}:{}", args.host, args.port);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .app_data(state.clone())
            .configure(crate::server::router::config)
    });
    if let Some(workers) = args.workers {
        server = server.workers(workers);
    }

    server.bind((args.host.as_str(), args.port))?.run().await
}
