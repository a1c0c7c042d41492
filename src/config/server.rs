/// Server configuration: listen address defaults and the startup flags.
///
/// The listen address is the only runtime surface of the coordinator.
use clap::Parser;

/// Default interface to bind.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default TCP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Path of the WebSocket endpoint.
pub const WS_PATH: &str = "/ws";

/// Command-line flags, each with an environment fallback.
#[derive(Parser, Debug, Clone)]
#[command(name = "tictactoe-server", about = "Two-player tic-tac-toe session coordinator")]
pub struct ServerArgs {
    /// Interface to listen on.
    #[arg(long, env = "TICTACTOE_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "TICTACTOE_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Number of HTTP worker threads (defaults to the number of CPUs).
    #[arg(long, env = "TICTACTOE_WORKERS")]
    pub workers: Option<usize>,
}
